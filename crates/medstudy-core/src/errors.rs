//! Cross-cutting error types for MedStudy.
//!
//! Store-specific errors (`StoreError`, `StorageError`) live in
//! `medstudy-store`. A unified error is deferred to `medstudy-cli`, which uses
//! `anyhow` where all crate errors converge.

use thiserror::Error;

/// Errors that can be raised by any MedStudy crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (format, invariants).
    #[error("Validation error: {0}")]
    Validation(String),
}
