//! Search-path resolution from dotted names to package handles.

use std::env;
use std::path::PathBuf;

use pakres_store::{DirStore, NamespaceStore, ResourceStore, Store, ZipStore};
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::manifest::{MANIFEST_FILE, Manifest};
use crate::package::{Package, PackageRef};

/// Environment variable listing search-path roots, split like `PATH`.
pub const PATH_ENV: &str = "PAKRES_PATH";

/// One search-path root: a directory of packages or a zip archive of them.
#[derive(Clone, Debug)]
pub enum Root {
    Dir(PathBuf),
    Archive(PathBuf),
}

impl Root {
    /// Classify a path: existing files are archives, everything else is
    /// treated as a directory root.
    pub fn classify(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.is_file() {
            Root::Archive(path)
        } else {
            Root::Dir(path)
        }
    }
}

/// Resolves dotted package names against an ordered search path.
///
/// The resolver is immutable once built; each [`Resolver::resolve`] walks
/// the roots once and carries no state between calls.
#[derive(Clone, Debug, Default)]
pub struct Resolver {
    roots: Vec<Root>,
}

impl Resolver {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Root::classify).collect(),
        }
    }

    /// Build the search path from [`PATH_ENV`].
    pub fn from_env() -> Self {
        let roots = env::var_os(PATH_ENV)
            .map(|raw| {
                env::split_paths(&raw)
                    .filter(|path| !path.as_os_str().is_empty())
                    .map(Root::classify)
                    .collect()
            })
            .unwrap_or_default();
        Self { roots }
    }

    pub fn roots(&self) -> &[Root] {
        &self.roots
    }

    /// Resolve a dotted package name to a handle.
    ///
    /// The first manifest-bearing directory or matching archive prefix in
    /// root order wins. Manifest-less directories accumulate as namespace
    /// portions and only form the package when no regular candidate exists
    /// anywhere on the path.
    pub fn resolve(&self, name: &str) -> Result<Package> {
        let (rel, prefix) = package_paths(name)?;
        let mut portions = Vec::new();

        for root in &self.roots {
            match root {
                Root::Dir(base) => {
                    let dir = base.join(&rel);
                    if !dir.is_dir() {
                        continue;
                    }
                    if dir.join(MANIFEST_FILE).is_file() {
                        debug!(package = name, dir = %dir.display(), "resolved to package directory");
                        let store = Store::from(DirStore::new(dir));
                        let manifest = load_manifest(name, &store)?;
                        return Ok(Package::new(name.to_string(), store, manifest));
                    }
                    trace!(package = name, dir = %dir.display(), "namespace portion candidate");
                    portions.push(dir);
                }
                Root::Archive(path) => match ZipStore::locate(path, &prefix) {
                    Ok(Some(store)) => {
                        debug!(package = name, archive = %path.display(), "resolved to archive member prefix");
                        let store = Store::from(store);
                        let manifest = load_manifest(name, &store)?;
                        return Ok(Package::new(name.to_string(), store, manifest));
                    }
                    Ok(None) => {}
                    Err(err) => {
                        warn!(archive = %path.display(), error = %err, "skipping unreadable archive root");
                    }
                },
            }
        }

        if !portions.is_empty() {
            debug!(package = name, portions = portions.len(), "resolved to namespace package");
            let store = Store::from(NamespaceStore::new(portions));
            return Ok(Package::new(name.to_string(), store, None));
        }

        Err(Error::Resolve(name.to_string()))
    }

    pub(crate) fn with_package<'a, T>(
        &self,
        package: PackageRef<'a>,
        op: impl FnOnce(&Package) -> Result<T>,
    ) -> Result<T> {
        match package {
            PackageRef::Handle(handle) => op(handle),
            PackageRef::Name(name) => op(&self.resolve(name)?),
        }
    }
}

/// Split a dotted name into the relative directory path and the archive
/// member prefix it addresses.
fn package_paths(name: &str) -> Result<(PathBuf, String)> {
    if name.is_empty() {
        return Err(Error::InvalidPackageName(name.to_string()));
    }
    let mut rel = PathBuf::new();
    for segment in name.split('.') {
        if segment.is_empty() || segment.contains(['/', '\\', '\0']) {
            return Err(Error::InvalidPackageName(name.to_string()));
        }
        rel.push(segment);
    }
    Ok((rel, name.replace('.', "/")))
}

fn load_manifest(name: &str, store: &Store) -> Result<Option<Manifest>> {
    let bytes = match store.read(MANIFEST_FILE) {
        Ok(bytes) => bytes,
        Err(pakres_store::Error::NotFound(_)) => return Ok(None),
        Err(err) => return Err(Error::from_store(name, err)),
    };
    let text = pakres_codec::decode(
        &bytes,
        pakres_codec::Encoding::Utf8,
        pakres_codec::ErrorPolicy::Strict,
    )?;
    Manifest::parse(name, &text).map(Some)
}
