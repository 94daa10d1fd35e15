//! CLI response types returned as JSON by `medstudy` commands.
//!
//! These structs define the shape of JSON output for commands like
//! `medstudy study add`, `medstudy discipline delete`, `medstudy goal set`,
//! and `medstudy data import`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{AppState, Discipline, StudyRecord};
use crate::enums::TopicOption;

/// Response from `medstudy study add`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudyCreateResponse {
    pub study: StudyRecord,
}

/// Response from `medstudy discipline add`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DisciplineCreateResponse {
    pub discipline: Discipline,
}

/// Response from `medstudy discipline delete`.
///
/// Deleting an unknown ID is not an error; `removed` is then `false`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DisciplineDeleteResponse {
    pub id: i64,
    pub removed: bool,
}

/// Response from `medstudy discipline topics`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TopicListResponse {
    pub discipline: String,
    pub topics: Vec<TopicOption>,
}

/// Response from `medstudy goal set` and `medstudy goal show`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GoalResponse {
    pub daily_goal: u32,
}

/// Collection sizes after `medstudy data import` or `medstudy data clear`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DataSummaryResponse {
    pub builtin_disciplines: usize,
    pub custom_disciplines: usize,
    pub studies: usize,
    pub daily_goal: u32,
}

impl From<&AppState> for DataSummaryResponse {
    fn from(state: &AppState) -> Self {
        Self {
            builtin_disciplines: state.disciplines.len(),
            custom_disciplines: state.custom_disciplines.len(),
            studies: state.studies.len(),
            daily_goal: state.settings.daily_goal,
        }
    }
}
