use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::DEFAULT_DAILY_GOAL;

const fn default_daily_goal() -> u32 {
    DEFAULT_DAILY_GOAL
}

/// User preferences. Exactly one instance exists per document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Settings {
    /// Number of study sessions the user aims for each day. Never below 1.
    #[serde(rename = "dailyGoal", default = "default_daily_goal")]
    pub daily_goal: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            daily_goal: default_daily_goal(),
        }
    }
}
