//! Raw input types for entity creation.
//!
//! Inputs carry values exactly as a form would submit them: numbers are still
//! text and are coerced by the store, see [`crate::helpers`].

pub mod study;
