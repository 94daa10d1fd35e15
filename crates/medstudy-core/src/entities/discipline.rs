use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A subject area with its ordered list of topics.
///
/// Built-in disciplines come from seed data; custom ones are added by the user
/// and flagged with `is_custom`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Discipline {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "assuntos")]
    pub topics: Vec<String>,
    #[serde(rename = "isCustom", default)]
    pub is_custom: bool,
}

impl Discipline {
    /// Case-insensitive name comparison used for uniqueness checks.
    #[must_use]
    pub fn name_matches(&self, other: &str) -> bool {
        self.name.to_lowercase() == other.to_lowercase()
    }
}
