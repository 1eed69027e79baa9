//! Filesystem document store

use crate::storage::traits::{DocumentStore, StorageError, StorageResult};
use crate::url::DestinationPath;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Document store writing plain files under a root directory
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Creates a store rooted at `root`
    ///
    /// The root itself is not created until a folder is requested.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Joins a relative location under the root, refusing anything that could escape it
    fn resolve(&self, relative: &Path) -> StorageResult<PathBuf> {
        let is_plain = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));

        if !is_plain || relative.as_os_str().is_empty() {
            return Err(StorageError::InvalidDestination(
                relative.display().to_string(),
            ));
        }

        Ok(self.root.join(relative))
    }
}

impl DocumentStore for FsStore {
    fn ensure_folder(&self, folder: &str) -> StorageResult<PathBuf> {
        let path = self.resolve(Path::new(folder))?;
        fs::create_dir_all(&path).map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    fn write_document(&self, dest: &DestinationPath, content: &str) -> StorageResult<PathBuf> {
        let path = self.resolve(&dest.relative_path())?;
        fs::write(&path, content.as_bytes()).map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
