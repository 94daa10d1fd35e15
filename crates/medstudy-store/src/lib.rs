//! # medstudy-store
//!
//! In-memory study state with key-value persistence for MedStudy.
//!
//! [`StudyStore`] owns the whole application document (built-in and custom
//! disciplines, study records, settings) and writes it back to a
//! [`KeyValueStore`] after every mutation. Two stores are provided:
//! [`MemoryStore`] for tests and throwaway sessions, and [`JsonFileStore`]
//! which keeps one JSON file per key on disk.
//!
//! Everything is synchronous. A `StudyStore` has a single owner and all
//! mutation goes through `&mut self`.

pub mod error;
pub mod helpers;
pub mod inputs;
pub mod kv;
pub mod repos;
pub mod seed;
pub mod service;

#[cfg(test)]
mod test_support;

pub use error::{StorageError, StoreError};
pub use inputs::study::{NewStudyRecord, NewStudyRecordBuilder};
pub use kv::{JsonFileStore, KeyValueStore, MemoryStore};
pub use service::{StoreOptions, StudyStore};
