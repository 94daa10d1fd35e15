//! Topic picker enums for MedStudy.
//!
//! A topic list offered to the user always ends with a sentinel meaning "let me
//! type a topic that is not in the list". The sentinel is a variant of its own,
//! so it can never be confused with a real topic that happens to share a name.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::OTHER_TOPIC_LABEL;

// ---------------------------------------------------------------------------
// TopicOption
// ---------------------------------------------------------------------------

/// One entry of a discipline's topic picker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TopicOption {
    /// A topic taken from the discipline's topic list.
    Listed { topic: String },
    /// The trailing "user will enter a custom topic" entry.
    EnterCustom,
}

impl TopicOption {
    #[must_use]
    pub fn listed(topic: impl Into<String>) -> Self {
        Self::Listed {
            topic: topic.into(),
        }
    }

    #[must_use]
    pub const fn is_enter_custom(&self) -> bool {
        matches!(self, Self::EnterCustom)
    }
}

impl fmt::Display for TopicOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Listed { topic } => f.write_str(topic),
            Self::EnterCustom => f.write_str("Other (type it in)"),
        }
    }
}

// ---------------------------------------------------------------------------
// TopicChoice
// ---------------------------------------------------------------------------

/// The topic a user picked when logging a study session.
///
/// `Other` carries whatever free text the user typed after choosing the
/// [`TopicOption::EnterCustom`] entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TopicChoice {
    Listed(String),
    Other(String),
}

impl TopicChoice {
    /// The topic string to store on the record.
    ///
    /// Listed topics are kept verbatim. Free text is trimmed and falls back to
    /// [`OTHER_TOPIC_LABEL`] when nothing is left.
    #[must_use]
    pub fn resolve(&self) -> String {
        match self {
            Self::Listed(topic) => topic.clone(),
            Self::Other(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    OTHER_TOPIC_LABEL.to_string()
                } else {
                    trimmed.to_string()
                }
            }
        }
    }
}
