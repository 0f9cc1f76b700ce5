//! Text decoding for package resources.
//!
//! # Architecture
//!
//! - `encoding.rs` - encoding and error-policy selection
//! - `decode.rs` - the decoders
//!
//! Decoding is a pure function of (bytes, encoding, policy). The strict
//! policy fails on the first invalid sequence; ignore drops invalid
//! sequences from the output; replace substitutes U+FFFD. The non-strict
//! policies never fail.

pub use decode::decode;
pub use encoding::{Encoding, ErrorPolicy};
pub use error::{Error, Result};

mod decode;
mod encoding;
mod error;
