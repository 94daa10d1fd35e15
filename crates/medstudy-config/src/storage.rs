//! Storage location configuration.

use std::path::PathBuf;

use medstudy_core::ids::STORAGE_KEY;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_key() -> String {
    STORAGE_KEY.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the persisted document. Empty means the platform
    /// data directory (`~/.local/share/medstudy` on Linux).
    #[serde(default)]
    pub data_dir: String,

    /// Key the document is stored under. Also the file stem on disk.
    #[serde(default = "default_key")]
    pub key: String,

    /// Optional JSON file with built-in disciplines, installed on first run.
    #[serde(default)]
    pub seed_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: String::new(),
            key: default_key(),
            seed_path: String::new(),
        }
    }
}

impl StorageConfig {
    /// Directory the file store should use.
    ///
    /// Falls back to `.medstudy` in the working directory when the platform
    /// has no data directory.
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        if !self.data_dir.is_empty() {
            return PathBuf::from(&self.data_dir);
        }
        dirs::data_dir().map_or_else(|| PathBuf::from(".medstudy"), |p| p.join("medstudy"))
    }

    /// Returns `true` if a built-in seed file is configured.
    #[must_use]
    pub const fn has_seed(&self) -> bool {
        !self.seed_path.is_empty()
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.key.trim().is_empty() {
            return Err(ConfigError::invalid("storage.key", "must not be empty"));
        }
        if self
            .key
            .chars()
            .any(|c| matches!(c, '/' | '\\') || c.is_control())
            || self.key == "."
            || self.key == ".."
        {
            return Err(ConfigError::invalid(
                "storage.key",
                format!("'{}' cannot be used as a file name", self.key),
            ));
        }
        Ok(())
    }
}
