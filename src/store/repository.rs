//! EntryStore trait and error types.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::{Lookup, Title};

/// Errors from the storage medium.
///
/// A missing entry is never an error; see [`Lookup::NotFound`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("entries directory does not exist: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("invalid encoding in {path}: {detail}")]
    InvalidEncoding { path: PathBuf, detail: String },

    /// The filesystem maps the title onto an existing file with a different name.
    #[error("'{title}' collides with existing file {path} (filesystem ignores case)")]
    NameCollision { title: Title, path: PathBuf },

    /// Something other than a regular file occupies the entry's path.
    #[error("entry path is not a regular file: {path}")]
    NotAFile { path: PathBuf },
}

impl StoreError {
    /// Creates an appropriate StoreError from an io::Error.
    pub(crate) fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => StoreError::PermissionDenied { path: path.into() },
            _ => StoreError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence for wiki entries keyed by title.
///
/// Implementations hold at most one body per title. `save_entry` always
/// overwrites; rejecting duplicates on create is the caller's job. There is
/// no locking, so concurrent writers to the same title race and the last
/// write wins.
pub trait EntryStore {
    /// Case-sensitive exact lookup.
    fn get_entry(&self, title: &Title) -> StoreResult<Lookup>;

    /// Creates or overwrites the entry.
    fn save_entry(&mut self, title: &Title, body: &str) -> StoreResult<()>;

    /// Removes the entry. Removing an absent title is a no-op.
    fn delete_entry(&mut self, title: &Title) -> StoreResult<()>;

    /// Returns every stored title exactly once, in the store's enumeration order.
    fn list_entries(&self) -> StoreResult<Vec<Title>>;

    /// Returns true if an entry is stored under the title.
    fn contains(&self, title: &Title) -> StoreResult<bool> {
        Ok(self.get_entry(title)?.is_found())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_displays_path() {
        let error = StoreError::DirectoryNotFound {
            path: PathBuf::from("/some/entries"),
        };
        assert!(error.to_string().contains("/some/entries"));
    }

    #[test]
    fn from_io_maps_permission_denied() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error = StoreError::from_io(Path::new("/e/Git.md"), io_error);
        assert!(matches!(error, StoreError::PermissionDenied { .. }));
    }

    #[test]
    fn from_io_maps_other_to_io() {
        let io_error = io::Error::new(io::ErrorKind::Other, "boom");
        let error = StoreError::from_io(Path::new("/e/Git.md"), io_error);
        assert!(matches!(error, StoreError::Io { .. }));
    }
}
