//! Storage backend abstraction
//!
//! Defines the StorageBackend trait and implementations for different storage systems:
//! - FileSystemStorageBackend: Native file system
//! - MemoryStorageBackend: In-process map of paths to bytes

use std::path::{Component, Path, PathBuf};

pub mod filesystem;
pub mod memory;

pub use filesystem::FileSystemStorageBackend;
pub use memory::MemoryStorageBackend;

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("Storage backend error: {0}")]
    BackendError(String),
}

/// Trait for storage backends
///
/// Exports are synchronous and write a whole document in one call, so the
/// trait is a thin path-to-bytes interface.
pub trait StorageBackend {
    /// Resolve a destination name (bare name or path) to an absolute path
    fn resolve(&self, name: &str) -> Result<PathBuf, StorageError>;

    /// Write a file to storage, replacing any previous content
    fn write_file(&self, path: &Path, content: &[u8]) -> Result<(), StorageError>;

    /// Read a file from storage
    fn read_file(&self, path: &Path) -> Result<Vec<u8>, StorageError>;

    /// Check if a file exists
    fn file_exists(&self, path: &Path) -> Result<bool, StorageError>;
}

/// Join `name` onto `base` (unless it is already absolute) and fold `.` and
/// `..` components lexically, without touching the file system.
pub(crate) fn join_normalized(base: &Path, name: &str) -> PathBuf {
    let joined = if Path::new(name).is_absolute() {
        PathBuf::from(name)
    } else {
        base.join(name)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
