use std::io::{self, Write};

use anyhow::Context;
use clap::Args;
use pakres_resource::{Encoding, ErrorPolicy, TextOptions};

use super::app::PathArg;

#[derive(Debug, Args)]
pub struct CatArg {
    /// Dotted package name
    pub package: String,
    /// Resource file name
    pub resource: String,
    /// Text encoding label (utf-8, utf-16, utf-16le, utf-16be, latin-1)
    #[arg(long, default_value = "utf-8")]
    pub encoding: Encoding,
    /// Invalid-sequence policy (strict, ignore, replace)
    #[arg(long, default_value = "strict")]
    pub errors: ErrorPolicy,
    #[command(flatten)]
    pub path: PathArg,
}

pub fn cat(arg: CatArg) -> anyhow::Result<()> {
    let resolver = arg.path.resolver();
    let text = resolver
        .read_text_with(
            arg.package.as_str(),
            &arg.resource,
            TextOptions::new().encoding(arg.encoding).errors(arg.errors),
        )
        .with_context(|| format!("reading '{}' from '{}'", arg.resource, arg.package))?;
    print!("{text}");
    Ok(())
}

#[derive(Debug, Args)]
pub struct DumpArg {
    /// Dotted package name
    pub package: String,
    /// Resource file name
    pub resource: String,
    #[command(flatten)]
    pub path: PathArg,
}

pub fn dump(arg: DumpArg) -> anyhow::Result<()> {
    let resolver = arg.path.resolver();
    let bytes = resolver
        .read_binary(arg.package.as_str(), &arg.resource)
        .with_context(|| format!("reading '{}' from '{}'", arg.resource, arg.package))?;
    io::stdout().write_all(&bytes)?;
    Ok(())
}
