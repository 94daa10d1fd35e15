//! Schema registry error types.

use thiserror::Error;

/// Errors from the schema registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// No schema is registered under this name.
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// A document did not conform to the named schema.
    #[error("Document does not match schema '{schema}': {}", errors.join("; "))]
    ValidationFailed {
        schema: String,
        /// One message per violation, in validator order.
        errors: Vec<String>,
    },

    /// A generated schema could not be compiled into a validator.
    #[error("Schema '{schema}' failed to compile: {reason}")]
    Compile { schema: String, reason: String },
}
