//! Package resolution and resource reading.
//!
//! # Architecture
//!
//! A [`Resolver`] walks an ordered search path of roots (directories or zip
//! archives) and resolves a dotted package name to a [`Package`] handle
//! backed by one of three store variants: a package directory, a member
//! prefix inside a zip archive, or a namespace package merged from several
//! roots. The read API then fetches one resource per call as raw bytes,
//! decoded text, or a byte stream.
//!
//! Every call is a stateless resolve-then-read; nothing is cached between
//! calls and nothing is ever written.
//!
//! ```no_run
//! use pakres_resource::{Encoding, Resolver, TextOptions};
//!
//! # fn main() -> pakres_resource::Result<()> {
//! let resolver = Resolver::from_env();
//! let raw = resolver.read_binary("app.assets", "logo.png")?;
//! let text = resolver.read_text_with(
//!     "app.assets",
//!     "greeting.txt",
//!     TextOptions::new().encoding(Encoding::Utf16),
//! )?;
//! # Ok(())
//! # }
//! ```

pub use error::{Error, Result};
pub use manifest::{MANIFEST_FILE, Manifest, PackageMeta};
pub use package::{Package, PackageRef};
pub use read::TextOptions;
pub use resolver::{PATH_ENV, Resolver, Root};

pub use pakres_codec::{Encoding, ErrorPolicy};
pub use pakres_store::{DirStore, NamespaceStore, ResourceStore, Store, ZipStore};

mod error;
mod manifest;
mod package;
mod read;
mod resolver;
