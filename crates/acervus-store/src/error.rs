//! # Store Error Types
//!
//! Error types for inventory store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError / CoreError (acervus-core)                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds persistence failures                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ErrorCode ← One of five kinds, shown by the CLI                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No store error is fatal. The CLI displays it and keeps the session going.

use std::io;
use std::path::PathBuf;

use acervus_core::{CoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// Error returned by every [`crate::InventoryStore`] operation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Domain rule violated (not found, insufficient stock, invalid input).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A destination file could not be written.
    ///
    /// ## When This Occurs
    /// - Parent directory does not exist
    /// - File permissions issue
    /// - Disk full
    #[error("Failed to write {}: {source}", .path.display())]
    PersistenceWriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file exists but could not be read.
    ///
    /// A missing file is not an error; it loads as an empty collection.
    #[error("Failed to read {}: {source}", .path.display())]
    PersistenceReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Error kinds for display and machine-readable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Non-numeric or out-of-range user-supplied value
    InvalidInput,

    /// No catalog entry matches the requested name
    NotFound,

    /// Sell quantity exceeds available stock
    InsufficientStock,

    /// Destination file cannot be written
    PersistenceWriteFailed,

    /// Existing file cannot be read
    PersistenceReadFailed,
}

impl ErrorCode {
    /// Stable upper-case name, same as the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::InsufficientStock => "INSUFFICIENT_STOCK",
            ErrorCode::PersistenceWriteFailed => "PERSISTENCE_WRITE_FAILED",
            ErrorCode::PersistenceReadFailed => "PERSISTENCE_READ_FAILED",
        }
    }
}

impl StoreError {
    /// Returns the kind of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            StoreError::Core(CoreError::ProductNotFound(_)) => ErrorCode::NotFound,
            StoreError::Core(CoreError::InsufficientStock { .. }) => ErrorCode::InsufficientStock,
            StoreError::Core(CoreError::Validation(_) | CoreError::Overflow { .. }) => {
                ErrorCode::InvalidInput
            }
            StoreError::PersistenceWriteFailed { .. } => ErrorCode::PersistenceWriteFailed,
            StoreError::PersistenceReadFailed { .. } => ErrorCode::PersistenceReadFailed,
        }
    }

    pub(crate) fn write_failed(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::PersistenceWriteFailed {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn read_failed(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::PersistenceReadFailed {
            path: path.into(),
            source,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Core(CoreError::Validation(err))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err: StoreError = CoreError::ProductNotFound("Rice".into()).into();
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.to_string(), "Product not found: Rice");

        let err: StoreError = ValidationError::MustBePositive {
            field: "quantity".into(),
        }
        .into();
        assert_eq!(err.code(), ErrorCode::InvalidInput);

        let err = StoreError::write_failed(
            "/nope/report.txt",
            io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        );
        assert_eq!(err.code(), ErrorCode::PersistenceWriteFailed);
        assert_eq!(
            err.to_string(),
            "Failed to write /nope/report.txt: no such directory"
        );
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::InsufficientStock).unwrap();
        assert_eq!(json, "\"INSUFFICIENT_STOCK\"");

        for code in [
            ErrorCode::InvalidInput,
            ErrorCode::NotFound,
            ErrorCode::InsufficientStock,
            ErrorCode::PersistenceWriteFailed,
            ErrorCode::PersistenceReadFailed,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }
}
