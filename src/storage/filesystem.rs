//! File system storage backend
//!
//! Implements StorageBackend for native file system operations.
//!
//! Relative destination names resolve against the backend's base directory,
//! which defaults to the process working directory.

use super::{StorageBackend, StorageError, join_normalized};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File system storage backend
#[derive(Debug, Clone)]
pub struct FileSystemStorageBackend {
    base_path: PathBuf,
}

impl Default for FileSystemStorageBackend {
    /// Backend rooted at the current working directory
    fn default() -> Self {
        Self::new(".")
    }
}

impl FileSystemStorageBackend {
    /// Create a new file system storage backend
    ///
    /// # Arguments
    ///
    /// * `base_path` - Directory relative destination names are resolved against
    ///
    /// # Example
    ///
    /// ```rust
    /// use shinobi_roster::storage::FileSystemStorageBackend;
    ///
    /// let backend = FileSystemStorageBackend::new("/workspace/exports");
    /// ```
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

fn map_io_error(path: &Path, action: &str, e: std::io::Error) -> StorageError {
    match e.kind() {
        ErrorKind::NotFound => StorageError::FileNotFound(path.display().to_string()),
        ErrorKind::PermissionDenied => {
            StorageError::PermissionDenied(format!("Cannot {} {}", action, path.display()))
        }
        _ => StorageError::IoError(format!("Failed to {} {}: {}", action, path.display(), e)),
    }
}

impl StorageBackend for FileSystemStorageBackend {
    fn resolve(&self, name: &str) -> Result<PathBuf, StorageError> {
        let base = std::path::absolute(&self.base_path).map_err(|e| {
            StorageError::IoError(format!(
                "Failed to resolve base directory {}: {}",
                self.base_path.display(),
                e
            ))
        })?;
        Ok(join_normalized(&base, name))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> Result<(), StorageError> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| match e.kind() {
                ErrorKind::PermissionDenied => StorageError::PermissionDenied(format!(
                    "Cannot create directory {}",
                    parent.display()
                )),
                _ => StorageError::DirectoryNotFound(format!("{}: {}", parent.display(), e)),
            })?;
        }

        fs::write(path, content).map_err(|e| map_io_error(path, "write", e))?;
        debug!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>, StorageError> {
        fs::read(path).map_err(|e| map_io_error(path, "read", e))
    }

    fn file_exists(&self, path: &Path) -> Result<bool, StorageError> {
        match fs::metadata(path) {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(map_io_error(path, "inspect", e)),
        }
    }
}
