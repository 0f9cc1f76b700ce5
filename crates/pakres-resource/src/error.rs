//! Error types for package resolution and resource reading.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("package '{0}' not found on the search path")]
    Resolve(String),

    #[error("'{0}' is not a valid dotted package name")]
    InvalidPackageName(String),

    #[error("resource '{resource}' not found in package '{package}'")]
    NotFound { package: String, resource: String },

    #[error("resource name '{0}' is not a plain file name")]
    InvalidName(String),

    #[error("malformed manifest in package '{package}': {source}")]
    Manifest {
        package: String,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Decode(#[from] pakres_codec::Error),

    #[error(transparent)]
    Store(pakres_store::Error),
}

impl Error {
    /// Attach package context to a store-level failure.
    pub(crate) fn from_store(package: &str, err: pakres_store::Error) -> Self {
        match err {
            pakres_store::Error::NotFound(resource) => Error::NotFound {
                package: package.to_string(),
                resource,
            },
            pakres_store::Error::InvalidName(name) => Error::InvalidName(name),
            other => Error::Store(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
