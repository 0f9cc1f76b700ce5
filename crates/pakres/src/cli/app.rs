use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pakres_resource::Resolver;

use super::{read, which};

#[derive(Debug, Parser)]
#[command(name = "pakres", version = env!("CARGO_PKG_VERSION"), about, long_about = None, propagate_version = true)]
pub struct App {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "c", name = "cat", about = "Decode a resource as text and print it")]
    Cat(read::CatArg),
    #[command(alias = "d", name = "dump", about = "Write the raw bytes of a resource to stdout")]
    Dump(read::DumpArg),
    #[command(alias = "w", name = "which", about = "Show where a package resolves to")]
    Which(which::WhichArg),
}

/// Search-path selection shared by every command.
#[derive(Debug, Args)]
pub struct PathArg {
    /// Search-path root (directory or zip archive); repeatable.
    /// Falls back to PAKRES_PATH when omitted.
    #[arg(long = "path", value_name = "ROOT")]
    pub roots: Vec<PathBuf>,
}

impl PathArg {
    pub fn resolver(&self) -> Resolver {
        if self.roots.is_empty() {
            Resolver::from_env()
        } else {
            Resolver::new(self.roots.iter().cloned())
        }
    }
}

pub fn run(app: App) -> anyhow::Result<()> {
    match app.cmd {
        Commands::Cat(arg) => read::cat(arg),
        Commands::Dump(arg) => read::dump(arg),
        Commands::Which(arg) => which::which(arg),
    }
}
