//! Whole-document operations: export, import, and clear.

use medstudy_core::entities::AppState;

use crate::error::StoreError;
use crate::kv::KeyValueStore;
use crate::service::StudyStore;

impl<S: KeyValueStore> StudyStore<S> {
    /// The live document as pretty-printed JSON, in the persisted shape.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Serialize` if serialization fails.
    pub fn export_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self.state())?)
    }

    /// Replace the whole document with a previously exported one.
    ///
    /// The text must parse as JSON, match the document schema, and satisfy the
    /// document invariants. Nothing changes if any check fails.
    ///
    /// # Errors
    ///
    /// - `StoreError::Validation` if the document is rejected.
    /// - `StoreError::Persistence` if the document could not be saved.
    pub fn import_json(&mut self, raw: &str) -> Result<(), StoreError> {
        let value: serde_json::Value = serde_json::from_str(raw)
            .map_err(|e| StoreError::Validation(format!("import is not valid JSON: {e}")))?;
        self.schema().validate_document(&value)?;

        let next: AppState = serde_json::from_value(value)
            .map_err(|e| StoreError::Validation(format!("import does not match document: {e}")))?;
        next.validate()?;

        let counts = (
            next.disciplines.len(),
            next.custom_disciplines.len(),
            next.studies.len(),
        );
        self.commit(next)?;

        tracing::debug!(
            builtin = counts.0,
            custom = counts.1,
            studies = counts.2,
            "document imported"
        );
        Ok(())
    }

    /// Drop custom disciplines and study records and reset settings.
    /// Built-in disciplines are kept.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the document could not be saved.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        let next = AppState {
            disciplines: self.state().disciplines.clone(),
            ..AppState::default()
        };
        self.commit(next)?;

        tracing::debug!("custom data cleared");
        Ok(())
    }
}
