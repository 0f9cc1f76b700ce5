//! Backing-store access for package resources.
//!
//! # Architecture
//!
//! A package's resources live in one of three physical forms: a plain
//! directory, a member prefix inside a zip archive, or a set of namespace
//! portions spread across search roots. [`ResourceStore`] is the capability
//! contract (`open`, `exists`, `read`); [`Store`] dispatches over the three
//! variants so callers never branch on the physical form.
//!
//! Stores are read-only and hold no open handles between calls.

pub use error::{Error, Result};
pub use store::{DirStore, NamespaceStore, ResourceStore, Store, ZipStore};

mod error;
pub mod name;
mod store;
