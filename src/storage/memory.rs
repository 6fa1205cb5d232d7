//! In-memory storage backend
//!
//! Keeps written documents in a map keyed by resolved path. Useful when the
//! caller wants the exported bytes without touching the file system.

use super::{StorageBackend, StorageError, join_normalized};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Memory-backed storage
#[derive(Debug)]
pub struct MemoryStorageBackend {
    base_path: PathBuf,
    files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
    read_only: bool,
}

impl Default for MemoryStorageBackend {
    fn default() -> Self {
        Self::new("/")
    }
}

impl MemoryStorageBackend {
    /// Create an empty store whose relative names resolve under `base_path`
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            files: RefCell::new(BTreeMap::new()),
            read_only: false,
        }
    }

    /// A store that rejects every write with `PermissionDenied`
    pub fn read_only(base_path: impl Into<PathBuf>) -> Self {
        Self {
            read_only: true,
            ..Self::new(base_path)
        }
    }

    /// Paths written so far, in sorted order
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }
}

impl StorageBackend for MemoryStorageBackend {
    fn resolve(&self, name: &str) -> Result<PathBuf, StorageError> {
        Ok(join_normalized(&self.base_path, name))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::PermissionDenied(format!(
                "Storage is read-only: {}",
                path.display()
            )));
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>, StorageError> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::FileNotFound(path.display().to_string()))
    }

    fn file_exists(&self, path: &Path) -> Result<bool, StorageError> {
        Ok(self.files.borrow().contains_key(path))
    }
}
