use std::collections::HashMap;

use crate::error::StorageError;
use crate::kv::KeyValueStore;

/// In-process key-value store.
///
/// Nothing survives the process. Writes can be switched off with
/// [`MemoryStore::set_fail_writes`] to simulate a full or read-only medium.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `value` under `key`.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self {
            entries,
            fail_writes: false,
        }
    }

    /// Make every subsequent write fail (or succeed again).
    pub const fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Peek at a stored value without going through the trait.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::WriteRefused {
                key: key.to_string(),
                reason: "writes are disabled".into(),
            });
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
