use std::fmt;
use std::io::Read;

use crate::error::Result;

pub use self::dir::DirStore;
pub use self::namespace::NamespaceStore;
pub use self::zip::ZipStore;

mod dir;
mod namespace;
mod zip;

/// Capability contract every backing store implements.
///
/// All access is read-only and per-call: `open` returns a byte stream for
/// one resource, `read` pulls its complete byte sequence, `exists` probes
/// without reading. Implementations keep nothing open between calls.
pub trait ResourceStore {
    fn open(&self, resource: &str) -> Result<Box<dyn Read + Send>>;

    fn exists(&self, resource: &str) -> bool;

    fn read(&self, resource: &str) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.open(resource)?.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

/// A package's physical backing store.
#[derive(Clone, Debug)]
pub enum Store {
    Dir(DirStore),
    Zip(ZipStore),
    Namespace(NamespaceStore),
}

impl ResourceStore for Store {
    fn open(&self, resource: &str) -> Result<Box<dyn Read + Send>> {
        match self {
            Store::Dir(store) => store.open(resource),
            Store::Zip(store) => store.open(resource),
            Store::Namespace(store) => store.open(resource),
        }
    }

    fn exists(&self, resource: &str) -> bool {
        match self {
            Store::Dir(store) => store.exists(resource),
            Store::Zip(store) => store.exists(resource),
            Store::Namespace(store) => store.exists(resource),
        }
    }

    fn read(&self, resource: &str) -> Result<Vec<u8>> {
        match self {
            Store::Dir(store) => store.read(resource),
            Store::Zip(store) => store.read(resource),
            Store::Namespace(store) => store.read(resource),
        }
    }
}

impl From<DirStore> for Store {
    fn from(store: DirStore) -> Self {
        Store::Dir(store)
    }
}

impl From<ZipStore> for Store {
    fn from(store: ZipStore) -> Self {
        Store::Zip(store)
    }
}

impl From<NamespaceStore> for Store {
    fn from(store: NamespaceStore) -> Self {
        Store::Namespace(store)
    }
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Store::Dir(store) => write!(f, "directory {}", store.root().display()),
            Store::Zip(store) => write!(
                f,
                "zip archive {}!/{}",
                store.archive().display(),
                store.prefix()
            ),
            Store::Namespace(store) => {
                write!(f, "namespace [")?;
                for (i, portion) in store.portions().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", portion.display())?;
                }
                write!(f, "]")
            }
        }
    }
}
