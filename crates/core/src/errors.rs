//! Core error types for the rental desk application.
//!
//! This module defines storage-agnostic error types. Backend-specific errors
//! (filesystem, serialization) are converted to these types by the storage
//! layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the quoting engine.
///
/// Nothing here is fatal to the session: validation errors block a single
/// finalize attempt, store errors surface the failing key, and everything
/// else degrades with a logged warning.
#[derive(Error, Debug)]
pub enum Error {
    #[error("State store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A finalize attempt arrived while another one was still pending.
    #[error("A quote generation is already in progress")]
    GenerationInProgress,

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for state-store operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert backend-specific errors into this format.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading from or writing to the backing medium failed.
    #[error("State store I/O failed: {0}")]
    Io(String),

    /// A persisted blob could not be decoded.
    #[error("Stored data is malformed: {0}")]
    Corrupted(String),

    /// Internal/unexpected storage error.
    #[error("Internal store error: {0}")]
    Internal(String),
}

/// Validation errors for draft quotes.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("No vehicles selected")]
    EmptySelection,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Store(StoreError::Corrupted(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
