use std::fs::File;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use tracing::trace;
use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::{Error, Result};
use crate::name;
use crate::store::ResourceStore;

/// Resources of a package stored under a member prefix of a zip archive.
///
/// The archive is reopened on every call; nothing is cached between reads.
#[derive(Clone, Debug)]
pub struct ZipStore {
    archive: PathBuf,
    prefix: String,
}

impl ZipStore {
    pub fn new(archive: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            archive: archive.into(),
            prefix: prefix.into(),
        }
    }

    /// Open `archive` and return a store for `prefix` if the archive holds
    /// members under that directory prefix.
    pub fn locate(archive: &Path, prefix: &str) -> Result<Option<Self>> {
        let zip = open_archive(archive)?;
        let dir = format!("{prefix}/");
        let found = zip.file_names().any(|member| member.starts_with(&dir));
        trace!(
            archive = %archive.display(),
            prefix,
            found,
            "probed archive for package prefix"
        );
        Ok(found.then(|| Self::new(archive, prefix)))
    }

    pub fn archive(&self) -> &Path {
        &self.archive
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn member_name(&self, resource: &str) -> String {
        if self.prefix.is_empty() {
            resource.to_string()
        } else {
            format!("{}/{}", self.prefix, resource)
        }
    }
}

fn open_archive(path: &Path) -> Result<ZipArchive<File>> {
    let file = File::open(path)?;
    ZipArchive::new(file).map_err(|_| Error::Archive {
        path: path.to_path_buf(),
    })
}

impl ResourceStore for ZipStore {
    fn open(&self, resource: &str) -> Result<Box<dyn Read + Send>> {
        Ok(Box::new(Cursor::new(self.read(resource)?)))
    }

    fn exists(&self, resource: &str) -> bool {
        let Ok(member) = name::validate(resource).map(|r| self.member_name(r)) else {
            return false;
        };
        let Ok(mut zip) = open_archive(&self.archive) else {
            return false;
        };
        match zip.by_name(&member) {
            Ok(entry) => entry.is_file(),
            Err(_) => false,
        }
    }

    fn read(&self, resource: &str) -> Result<Vec<u8>> {
        let member = self.member_name(name::validate(resource)?);
        let mut zip = open_archive(&self.archive)?;
        let mut entry = match zip.by_name(&member) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => {
                return Err(Error::NotFound(resource.to_string()));
            }
            Err(_) => {
                return Err(Error::Archive {
                    path: self.archive.clone(),
                });
            }
        };
        if !entry.is_file() {
            return Err(Error::NotFound(resource.to_string()));
        }
        let mut buf = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut buf)?;
        Ok(buf)
    }
}
