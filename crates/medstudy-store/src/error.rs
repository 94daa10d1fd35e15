//! Store error types for medstudy-store.

use std::path::PathBuf;

use medstudy_core::errors::CoreError;
use medstudy_schema::SchemaError;
use thiserror::Error;

/// Errors raised by a [`crate::KeyValueStore`].
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store declined the write (quota, read-only medium, test double).
    #[error("Write refused for key '{key}': {reason}")]
    WriteRefused { key: String, reason: String },
}

/// Errors from [`crate::StudyStore`] operations.
///
/// `Validation` and `Duplicate` leave the state untouched. `Persistence`
/// means the in-memory mutation was computed but could not be saved; whether
/// it is still visible depends on [`crate::StoreOptions::rollback_on_save_failure`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// User input failed a precondition.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A discipline with the same name (ignoring case) already exists.
    #[error("Discipline already exists: {name}")]
    Duplicate { name: String },

    /// Writing the document to the key-value store failed.
    #[error("Failed to persist state: {0}")]
    Persistence(#[from] StorageError),

    /// The document could not be serialized.
    #[error("Failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A built-in seed file could not be read or parsed.
    #[error("Invalid seed file {}: {reason}", path.display())]
    Seed { path: PathBuf, reason: String },
}

impl From<CoreError> for StoreError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(msg) => Self::Validation(msg),
            other @ CoreError::NotFound { .. } => Self::Validation(other.to_string()),
        }
    }
}

impl From<SchemaError> for StoreError {
    fn from(error: SchemaError) -> Self {
        Self::Validation(error.to_string())
    }
}
