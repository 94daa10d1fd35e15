//! Key-value persistence collaborators.
//!
//! The store only ever needs two operations: read the document stored under a
//! key, and replace it. Implementations must not leave a half-written value
//! behind when a write fails.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::StorageError;

/// A synchronous string-keyed store.
pub trait KeyValueStore {
    /// Return the value stored under `key`, or `None` if nothing was stored.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing medium cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value could not be stored. The previous
    /// value, if any, is left in place.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
