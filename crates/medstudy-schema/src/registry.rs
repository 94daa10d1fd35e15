//! Central schema registry for all MedStudy types.
//!
//! The `SchemaRegistry` builds JSON Schemas from medstudy-core types at
//! construction time using [`schemars::schema_for!`] and provides validation
//! via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Name of the schema describing the whole persisted document.
pub const APP_STATE_SCHEMA: &str = "app_state";

/// Central store of all JSON Schemas in the MedStudy system.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a new registry containing the entity and response schemas from
    /// medstudy-core.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. `schemars` output is always JSON-serialisable.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Persisted document ---
        register!(schemas, "discipline", medstudy_core::entities::Discipline);
        register!(schemas, "study_record", medstudy_core::entities::StudyRecord);
        register!(schemas, "settings", medstudy_core::entities::Settings);
        register!(schemas, APP_STATE_SCHEMA, medstudy_core::entities::AppState);
        register!(schemas, "topic_option", medstudy_core::enums::TopicOption);

        // --- CLI responses ---
        register!(
            schemas,
            "study_create_response",
            medstudy_core::responses::StudyCreateResponse
        );
        register!(
            schemas,
            "discipline_create_response",
            medstudy_core::responses::DisciplineCreateResponse
        );
        register!(
            schemas,
            "discipline_delete_response",
            medstudy_core::responses::DisciplineDeleteResponse
        );
        register!(
            schemas,
            "topic_list_response",
            medstudy_core::responses::TopicListResponse
        );
        register!(schemas, "goal_response", medstudy_core::responses::GoalResponse);
        register!(
            schemas,
            "data_summary_response",
            medstudy_core::responses::DataSummaryResponse
        );

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown,
    /// `SchemaError::Compile` if the schema cannot be turned into a validator,
    /// or `SchemaError::ValidationFailed` listing every violation.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema).map_err(|e| SchemaError::Compile {
            schema: name.to_string(),
            reason: e.to_string(),
        })?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{} at '{}'", e, e.instance_path))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed {
                schema: name.to_string(),
                errors,
            })
        }
    }

    /// Validate a whole persisted document.
    ///
    /// # Errors
    ///
    /// Same as [`SchemaRegistry::validate`] for [`APP_STATE_SCHEMA`].
    pub fn validate_document(&self, instance: &serde_json::Value) -> Result<(), SchemaError> {
        self.validate(APP_STATE_SCHEMA, instance)
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medstudy_core::entities::{AppState, Discipline, Settings, StudyRecord};
    use pretty_assertions::assert_eq;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new()
    }

    #[test]
    fn registry_has_expected_count() {
        // 5 document types + 6 responses
        assert_eq!(registry().schema_count(), 11);
    }

    #[test]
    fn registry_list_is_sorted() {
        let names = registry().list();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn get_nonexistent_schema() {
        assert!(registry().get("nonexistent").is_none());
    }

    #[test]
    fn validate_full_document() {
        let state = AppState {
            disciplines: vec![Discipline {
                id: 1,
                name: "Anatomy".into(),
                topics: vec!["Bones".into()],
                is_custom: false,
            }],
            custom_disciplines: vec![],
            studies: vec![StudyRecord {
                id: 2,
                discipline_name: "Anatomy".into(),
                topic: "Bones".into(),
                total_questions: 20,
                correct_answers: 18,
                date: "2026-04-02".into(),
                duration_minutes: 35,
                notes: String::new(),
            }],
            settings: Settings { daily_goal: 4 },
        };
        let json = serde_json::to_value(&state).unwrap();
        assert!(registry().validate_document(&json).is_ok());
    }

    #[test]
    fn validate_rejects_wrong_types() {
        let invalid = serde_json::json!({
            "disciplines": [],
            "customDisciplines": [{"id": 1, "nome": "Anatomy", "assuntos": "Bones", "isCustom": true}],
            "studies": [],
            "settings": {"dailyGoal": 3}
        });
        let result = registry().validate_document(&invalid);
        match result {
            Err(SchemaError::ValidationFailed { schema, errors }) => {
                assert_eq!(schema, APP_STATE_SCHEMA);
                assert!(!errors.is_empty());
            }
            other => panic!("Expected ValidationFailed, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_string_goal() {
        let invalid = serde_json::json!({"settings": {"dailyGoal": "five"}});
        assert!(registry().validate_document(&invalid).is_err());
    }

    #[test]
    fn validate_nonexistent_schema_returns_not_found() {
        let result = registry().validate("bogus", &serde_json::json!({}));
        assert!(matches!(result, Err(SchemaError::NotFound(_))));
    }

    #[test]
    fn all_expected_schemas_present() {
        let reg = registry();
        let expected = [
            "discipline",
            "study_record",
            "settings",
            "app_state",
            "topic_option",
            "study_create_response",
            "discipline_create_response",
            "discipline_delete_response",
            "topic_list_response",
            "goal_response",
            "data_summary_response",
        ];
        for name in &expected {
            assert!(reg.get(name).is_some(), "Missing expected schema: {name}");
        }
    }
}
