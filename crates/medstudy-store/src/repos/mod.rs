//! Repository modules implementing the operations on each part of the document.
//!
//! Each module adds methods to `StudyStore` via `impl StudyStore` blocks.

pub mod data;
pub mod discipline;
pub mod settings;
pub mod study;
