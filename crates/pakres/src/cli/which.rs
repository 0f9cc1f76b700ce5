use anyhow::Context;
use clap::Args;

use super::app::PathArg;

#[derive(Debug, Args)]
pub struct WhichArg {
    /// Dotted package name
    pub package: String,
    #[command(flatten)]
    pub path: PathArg,
}

pub fn which(arg: WhichArg) -> anyhow::Result<()> {
    let resolver = arg.path.resolver();
    let package = resolver
        .resolve(&arg.package)
        .with_context(|| format!("resolving '{}'", arg.package))?;
    println!("{}", package.store());
    if let Some(meta) = package.manifest().map(|m| &m.package) {
        if let Some(version) = &meta.version {
            println!("version: {version}");
        }
        if let Some(description) = &meta.description {
            println!("description: {description}");
        }
    }
    Ok(())
}
