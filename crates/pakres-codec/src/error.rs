//! Error types for text decoding.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid {encoding} sequence at byte {offset}")]
    InvalidSequence { encoding: &'static str, offset: usize },

    #[error("truncated {encoding} data: stray trailing byte at offset {offset}")]
    Truncated { encoding: &'static str, offset: usize },

    #[error("unknown encoding label '{0}'")]
    UnknownLabel(String),

    #[error("unknown error policy '{0}'")]
    UnknownPolicy(String),
}

pub type Result<T> = std::result::Result<T, Error>;
