use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use tracing::trace;

use crate::error::{Error, Result};
use crate::name;
use crate::store::ResourceStore;

/// Resources of a namespace package split across portion directories.
///
/// Portions keep search-path order; the first portion holding a file with
/// the requested name wins.
#[derive(Clone, Debug)]
pub struct NamespaceStore {
    portions: Vec<PathBuf>,
}

impl NamespaceStore {
    pub fn new(portions: Vec<PathBuf>) -> Self {
        Self { portions }
    }

    pub fn portions(&self) -> &[PathBuf] {
        &self.portions
    }

    fn locate_file(&self, resource: &str) -> Result<Option<PathBuf>> {
        let file = name::validate(resource)?;
        Ok(self
            .portions
            .iter()
            .map(|portion| portion.join(file))
            .find(|candidate| candidate.is_file()))
    }
}

impl ResourceStore for NamespaceStore {
    fn open(&self, resource: &str) -> Result<Box<dyn Read + Send>> {
        match self.locate_file(resource)? {
            Some(path) => {
                trace!(resource, path = %path.display(), "resource found in namespace portion");
                Ok(Box::new(File::open(path)?))
            }
            None => Err(Error::NotFound(resource.to_string())),
        }
    }

    fn exists(&self, resource: &str) -> bool {
        matches!(self.locate_file(resource), Ok(Some(_)))
    }
}
