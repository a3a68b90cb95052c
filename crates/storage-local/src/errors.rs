//! Storage-specific error types for the local file store.
//!
//! These errors are internal to the storage layer and are converted to
//! `fleetquote_core::Error` before crossing the crate boundary.

use thiserror::Error;

use fleetquote_core::errors::{Error, StoreError};

/// Errors internal to the file-backed store.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("State file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("State file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Io(e) => Error::Store(StoreError::Io(e.to_string())),
            StorageError::Malformed(e) => Error::Store(StoreError::Corrupted(e.to_string())),
        }
    }
}
