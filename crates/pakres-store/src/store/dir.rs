use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::name;
use crate::store::ResourceStore;

/// Resources of a regular package stored as a plain directory.
#[derive(Clone, Debug)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resource_path(&self, resource: &str) -> Result<PathBuf> {
        Ok(self.root.join(name::validate(resource)?))
    }
}

impl ResourceStore for DirStore {
    fn open(&self, resource: &str) -> Result<Box<dyn Read + Send>> {
        let path = self.resource_path(resource)?;
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(Error::NotFound(resource.to_string()));
            }
            Err(err) => return Err(err.into()),
        };
        // Directories open fine on some platforms; only files are resources.
        if !file.metadata()?.is_file() {
            return Err(Error::NotFound(resource.to_string()));
        }
        Ok(Box::new(file))
    }

    fn exists(&self, resource: &str) -> bool {
        self.resource_path(resource)
            .map(|path| path.is_file())
            .unwrap_or(false)
    }
}
