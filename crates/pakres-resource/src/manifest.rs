//! The `package.toml` manifest marking a regular package.

use serde::Deserialize;

use crate::error::{Error, Result};

/// File name that marks a directory as a regular package.
pub const MANIFEST_FILE: &str = "package.toml";

/// Parsed `package.toml` contents. An empty manifest is valid; the file's
/// presence alone is what makes a package regular.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub package: PackageMeta,
}

/// The `[package]` table.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PackageMeta {
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
}

impl Manifest {
    /// Parse manifest text, reporting `package` as the owning package on
    /// failure.
    pub fn parse(package: &str, text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|source| Error::Manifest {
            package: package.to_string(),
            source,
        })
    }
}
