//! Resolved package handles.

use pakres_store::Store;

use crate::error::{Error, Result};
use crate::manifest::Manifest;

/// A resolved package: a dotted name bound to one backing store.
///
/// Handles are immutable; every read goes back to the backing store, so a
/// handle can be held and reused freely across threads.
#[derive(Debug)]
pub struct Package {
    name: String,
    store: Store,
    manifest: Option<Manifest>,
}

impl Package {
    pub(crate) fn new(name: String, store: Store, manifest: Option<Manifest>) -> Self {
        Self {
            name,
            store,
            manifest,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Backing store this package resolved to.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Manifest metadata, when the package carries a `package.toml`.
    pub fn manifest(&self) -> Option<&Manifest> {
        self.manifest.as_ref()
    }

    pub(crate) fn store_result<T>(&self, result: pakres_store::Result<T>) -> Result<T> {
        result.map_err(|err| Error::from_store(&self.name, err))
    }
}

/// Either a resolved handle or a dotted name resolved at call time.
///
/// The read API takes `impl Into<PackageRef>` so one signature serves both
/// forms.
#[derive(Clone, Copy, Debug)]
pub enum PackageRef<'a> {
    Handle(&'a Package),
    Name(&'a str),
}

impl<'a> From<&'a Package> for PackageRef<'a> {
    fn from(package: &'a Package) -> Self {
        PackageRef::Handle(package)
    }
}

impl<'a> From<&'a str> for PackageRef<'a> {
    fn from(name: &'a str) -> Self {
        PackageRef::Name(name)
    }
}

impl<'a> From<&'a String> for PackageRef<'a> {
    fn from(name: &'a String) -> Self {
        PackageRef::Name(name)
    }
}
