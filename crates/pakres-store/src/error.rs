//! Error types for store access.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("resource name '{0}' is not a plain file name")]
    InvalidName(String),

    #[error("resource '{0}' not found")]
    NotFound(String),

    #[error("'{path}' is not a readable zip archive")]
    Archive { path: PathBuf },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
