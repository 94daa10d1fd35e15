//! General application configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

const fn default_rollback() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Undo an in-memory mutation when persisting it fails.
    ///
    /// With `false` the mutation stays visible for the rest of the process
    /// even though it never reached storage.
    #[serde(default = "default_rollback")]
    pub rollback_on_save_failure: bool,

    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            rollback_on_save_failure: default_rollback(),
            default_limit: default_limit(),
        }
    }
}

impl GeneralConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.default_limit == 0 {
            return Err(ConfigError::invalid(
                "general.default_limit",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}
