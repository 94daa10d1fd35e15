use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Discipline, Settings, StudyRecord};
use crate::errors::CoreError;
use crate::ids::MIN_DAILY_GOAL;

/// The complete application document.
///
/// `disciplines` holds the built-in set and is only written when seed data is
/// installed. Every user mutation touches `custom_disciplines`, `studies`, or
/// `settings`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AppState {
    #[serde(default)]
    pub disciplines: Vec<Discipline>,
    #[serde(rename = "customDisciplines", default)]
    pub custom_disciplines: Vec<Discipline>,
    #[serde(default)]
    pub studies: Vec<StudyRecord>,
    #[serde(default)]
    pub settings: Settings,
}

impl AppState {
    /// Built-in disciplines followed by custom ones.
    pub fn all_disciplines(&self) -> impl Iterator<Item = &Discipline> {
        self.disciplines.iter().chain(self.custom_disciplines.iter())
    }

    /// Exact-name lookup across built-in and custom disciplines.
    #[must_use]
    pub fn find_discipline(&self, name: &str) -> Option<&Discipline> {
        self.all_disciplines().find(|d| d.name == name)
    }

    /// Whether any discipline already uses `name`, ignoring case.
    #[must_use]
    pub fn has_discipline_named(&self, name: &str) -> bool {
        self.all_disciplines().any(|d| d.name_matches(name))
    }

    /// Largest ID used by any discipline or study record.
    #[must_use]
    pub fn max_id(&self) -> Option<i64> {
        self.all_disciplines()
            .map(|d| d.id)
            .chain(self.studies.iter().map(|s| s.id))
            .max()
    }

    /// Check the document-level invariants.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first violated invariant:
    /// blank or duplicate discipline names, duplicate discipline IDs across the
    /// built-in and custom lists, a discipline without topics or with
    /// a blank topic, a custom flag on the wrong list, duplicate study record
    /// IDs, or a daily goal below the minimum.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut names = HashSet::new();
        let mut discipline_ids = HashSet::new();
        for d in &self.disciplines {
            if d.is_custom {
                return Err(CoreError::Validation(format!(
                    "built-in discipline '{}' is flagged as custom",
                    d.name
                )));
            }
        }
        for d in &self.custom_disciplines {
            if !d.is_custom {
                return Err(CoreError::Validation(format!(
                    "custom discipline '{}' is not flagged as custom",
                    d.name
                )));
            }
        }
        for d in self.all_disciplines() {
            if d.name.trim().is_empty() {
                return Err(CoreError::Validation(format!(
                    "discipline {} has an empty name",
                    d.id
                )));
            }
            if !names.insert(d.name.to_lowercase()) {
                return Err(CoreError::Validation(format!(
                    "duplicate discipline name '{}'",
                    d.name
                )));
            }
            if !discipline_ids.insert(d.id) {
                return Err(CoreError::Validation(format!(
                    "duplicate discipline id {}",
                    d.id
                )));
            }
            if d.topics.is_empty() {
                return Err(CoreError::Validation(format!(
                    "discipline '{}' has no topics",
                    d.name
                )));
            }
            if d.topics.iter().any(|t| t.trim().is_empty()) {
                return Err(CoreError::Validation(format!(
                    "discipline '{}' has an empty topic",
                    d.name
                )));
            }
        }

        let mut ids = HashSet::new();
        for s in &self.studies {
            if !ids.insert(s.id) {
                return Err(CoreError::Validation(format!(
                    "duplicate study record id {}",
                    s.id
                )));
            }
        }

        if self.settings.daily_goal < MIN_DAILY_GOAL {
            return Err(CoreError::Validation(format!(
                "daily goal must be at least {MIN_DAILY_GOAL}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discipline(id: i64, name: &str, custom: bool) -> Discipline {
        Discipline {
            id,
            name: name.into(),
            topics: vec!["General".into()],
            is_custom: custom,
        }
    }

    fn record(id: i64, discipline: &str) -> StudyRecord {
        StudyRecord {
            id,
            discipline_name: discipline.into(),
            topic: "General".into(),
            total_questions: 10,
            correct_answers: 7,
            date: "2026-03-01".into(),
            duration_minutes: 45,
            notes: String::new(),
        }
    }

    fn sample() -> AppState {
        AppState {
            disciplines: vec![discipline(1, "Anatomy", false)],
            custom_disciplines: vec![discipline(2, "Physio", true)],
            studies: vec![record(3, "Anatomy"), record(4, "Deleted")],
            settings: Settings::default(),
        }
    }

    #[test]
    fn default_state_is_empty_with_goal_three() {
        let state = AppState::default();
        assert!(state.disciplines.is_empty());
        assert!(state.custom_disciplines.is_empty());
        assert!(state.studies.is_empty());
        assert_eq!(state.settings.daily_goal, 3);
        assert_eq!(state.max_id(), None);
    }

    #[test]
    fn builtin_listed_before_custom() {
        let state = sample();
        let names: Vec<&str> = state.all_disciplines().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Anatomy", "Physio"]);
    }

    #[test]
    fn find_is_exact_but_uniqueness_is_case_insensitive() {
        let state = sample();
        assert!(state.find_discipline("Anatomy").is_some());
        assert!(state.find_discipline("anatomy").is_none());
        assert!(state.has_discipline_named("anatomy"));
        assert!(state.has_discipline_named("PHYSIO"));
        assert!(!state.has_discipline_named("Pathology"));
    }

    #[test]
    fn max_id_spans_all_collections() {
        assert_eq!(sample().max_id(), Some(4));
    }

    #[test]
    fn valid_state_passes() {
        assert_eq!(sample().validate(), Ok(()));
    }

    #[test]
    fn orphaned_records_are_valid() {
        let mut state = sample();
        state.custom_disciplines.clear();
        state.studies.push(record(9, "Physio"));
        assert_eq!(state.validate(), Ok(()));
    }

    #[test]
    fn duplicate_names_across_sets_rejected() {
        let mut state = sample();
        state.custom_disciplines.push(discipline(5, "ANATOMY", true));
        assert!(matches!(state.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn duplicate_discipline_ids_rejected() {
        let mut state = sample();
        state.custom_disciplines.push(discipline(2, "Pathology", true));
        assert_eq!(
            state.validate(),
            Err(CoreError::Validation("duplicate discipline id 2".into()))
        );

        let mut across = sample();
        let builtin_id = across.disciplines[0].id;
        across.custom_disciplines[0].id = builtin_id;
        assert!(matches!(across.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn topicless_discipline_rejected() {
        let mut state = sample();
        state.custom_disciplines[0].topics.clear();
        assert!(matches!(state.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn duplicate_record_ids_rejected() {
        let mut state = sample();
        state.studies.push(record(3, "Anatomy"));
        assert!(matches!(state.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn zero_goal_rejected() {
        let mut state = sample();
        state.settings.daily_goal = 0;
        assert!(matches!(state.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn misplaced_custom_flag_rejected() {
        let mut state = sample();
        state.disciplines[0].is_custom = true;
        assert!(matches!(state.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn missing_sections_default() {
        let state: AppState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, AppState::default());
    }
}
