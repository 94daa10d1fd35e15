//! Store layer owning the application document.
//!
//! `StudyStore` wraps a [`KeyValueStore`] (persistence), the live
//! [`AppState`], and a `SchemaRegistry` (import validation). All entity
//! operations are implemented as `impl StudyStore` blocks in [`crate::repos`].

use medstudy_core::entities::{AppState, Discipline};
use medstudy_core::ids::{self, STORAGE_KEY};
use medstudy_schema::SchemaRegistry;

use crate::error::StoreError;
use crate::kv::KeyValueStore;
use crate::seed;

/// Behavior knobs for a [`StudyStore`].
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Key the document is stored under.
    pub key: String,
    /// Undo a mutation in memory when it cannot be persisted.
    pub rollback_on_save_failure: bool,
    /// Built-in disciplines installed when the persisted set is empty.
    pub builtin_seed: Vec<Discipline>,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            key: STORAGE_KEY.to_string(),
            rollback_on_save_failure: true,
            builtin_seed: Vec::new(),
        }
    }
}

/// Owns all application state and persists it after every mutation.
///
/// Every mutation follows this protocol:
/// 1. Validate input against the current state (no change on failure)
/// 2. Build the next state as a working copy
/// 3. Serialize and write it to the key-value store
/// 4. Commit the working copy, or keep it anyway when rollback is disabled
pub struct StudyStore<S: KeyValueStore> {
    kv: S,
    state: AppState,
    options: StoreOptions,
    schema: SchemaRegistry,
}

impl<S: KeyValueStore> StudyStore<S> {
    /// Load the store with default options.
    pub fn initialize(kv: S) -> Self {
        Self::initialize_with(kv, StoreOptions::default())
    }

    /// Load the persisted document, falling back to the empty default state.
    ///
    /// Never fails: a missing document, an unreadable store, or a document
    /// that does not parse all yield [`AppState::default`], with a warning
    /// logged for the latter two. Built-in seed disciplines are installed in
    /// memory when the loaded set is empty; they reach storage with the next
    /// successful mutation.
    pub fn initialize_with(kv: S, options: StoreOptions) -> Self {
        let mut state = load_state(&kv, &options.key);

        if state.disciplines.is_empty() && !options.builtin_seed.is_empty() {
            state.disciplines =
                seed::normalize_seed(options.builtin_seed.clone(), &state.custom_disciplines);
            tracing::debug!(
                count = state.disciplines.len(),
                "installed built-in disciplines from seed"
            );
        }

        Self {
            kv,
            state,
            options,
            schema: SchemaRegistry::new(),
        }
    }

    /// The live application document.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// The options this store was opened with.
    #[must_use]
    pub const fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Access the underlying key-value store.
    #[must_use]
    pub const fn kv(&self) -> &S {
        &self.kv
    }

    /// Access the underlying key-value store mutably.
    pub const fn kv_mut(&mut self) -> &mut S {
        &mut self.kv
    }

    /// Access the schema registry.
    #[must_use]
    pub const fn schema(&self) -> &SchemaRegistry {
        &self.schema
    }

    /// The live document in its persisted (compact JSON) form.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Serialize` if serialization fails.
    pub fn serialize_state(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string(&self.state)?)
    }

    /// Pick an ID for a new entity.
    pub(crate) fn next_id(&self) -> i64 {
        ids::next_id(ids::now_millis(), self.state.max_id())
    }

    /// Persist `next` and make it the live state.
    ///
    /// On a failed write the live state is left untouched when rollback is
    /// enabled, and replaced anyway when it is not. The error is returned in
    /// both cases.
    pub(crate) fn commit(&mut self, next: AppState) -> Result<(), StoreError> {
        let payload = serde_json::to_string(&next)?;
        match self.kv.write(&self.options.key, &payload) {
            Ok(()) => {
                self.state = next;
                Ok(())
            }
            Err(error) => {
                tracing::error!(%error, key = %self.options.key, "failed to save state");
                if !self.options.rollback_on_save_failure {
                    self.state = next;
                }
                Err(error.into())
            }
        }
    }
}

fn load_state<S: KeyValueStore>(kv: &S, key: &str) -> AppState {
    let raw = match kv.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return AppState::default(),
        Err(error) => {
            tracing::warn!(%error, key, "failed to read stored state; starting empty");
            return AppState::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(state) => state,
        Err(error) => {
            tracing::warn!(%error, key, "stored state is malformed; starting empty");
            AppState::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use medstudy_core::entities::Settings;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::kv::MemoryStore;
    use crate::test_support::helpers::{builtin, sample_state};

    #[test]
    fn empty_store_yields_default_state() {
        let store = StudyStore::initialize(MemoryStore::new());
        assert_eq!(store.state(), &AppState::default());
        assert_eq!(store.state().settings, Settings { daily_goal: 3 });
    }

    #[test]
    fn malformed_document_yields_default_state() {
        for raw in ["{not json", "[]", r#"{"studies": 5}"#, ""] {
            let store = StudyStore::initialize(MemoryStore::with_entry(STORAGE_KEY, raw));
            assert_eq!(store.state(), &AppState::default(), "input {raw:?}");
        }
    }

    #[test]
    fn malformed_document_is_not_overwritten_on_load() {
        let store = StudyStore::initialize(MemoryStore::with_entry(STORAGE_KEY, "{oops"));
        assert_eq!(store.kv().get(STORAGE_KEY), Some("{oops"));
    }

    #[test]
    fn serialized_state_roundtrips_through_initialize() {
        let state = sample_state();
        let raw = serde_json::to_string(&state).unwrap();
        let store = StudyStore::initialize(MemoryStore::with_entry(STORAGE_KEY, raw));
        assert_eq!(store.state(), &state);

        let again = StudyStore::initialize(MemoryStore::with_entry(
            STORAGE_KEY,
            store.serialize_state().unwrap(),
        ));
        assert_eq!(again.state(), store.state());
    }

    #[test]
    fn custom_key_is_respected() {
        let raw = serde_json::to_string(&sample_state()).unwrap();
        let options = StoreOptions {
            key: "other-key".into(),
            ..StoreOptions::default()
        };
        let store = StudyStore::initialize_with(MemoryStore::with_entry("other-key", raw), options);
        assert_eq!(store.state(), &sample_state());
    }

    #[test]
    fn seed_installed_only_when_builtins_empty() {
        let options = StoreOptions {
            builtin_seed: vec![builtin(1, "Cardiology"), builtin(2, "Pharmacology")],
            ..StoreOptions::default()
        };
        let fresh = StudyStore::initialize_with(MemoryStore::new(), options.clone());
        let names: Vec<&str> = fresh
            .state()
            .disciplines
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["Cardiology", "Pharmacology"]);

        let raw = serde_json::to_string(&sample_state()).unwrap();
        let existing =
            StudyStore::initialize_with(MemoryStore::with_entry(STORAGE_KEY, raw), options);
        assert_eq!(existing.state().disciplines, sample_state().disciplines);
    }

    #[test]
    fn seed_never_duplicates_a_custom_discipline_name() {
        let mut stored = AppState::default();
        stored.custom_disciplines.push(Discipline {
            id: 1_700_000_000_000,
            name: "Cardiology".into(),
            topics: vec!["Arrhythmias".into()],
            is_custom: true,
        });
        let raw = serde_json::to_string(&stored).unwrap();
        let options = StoreOptions {
            builtin_seed: vec![builtin(1, "cardiology"), builtin(2, "Pharmacology")],
            ..StoreOptions::default()
        };

        let store = StudyStore::initialize_with(MemoryStore::with_entry(STORAGE_KEY, raw), options);
        let names: Vec<&str> = store
            .state()
            .all_disciplines()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["Pharmacology", "Cardiology"]);
        store.state().validate().unwrap();

        let exported = store.serialize_state().unwrap();
        let reopened = StudyStore::initialize(MemoryStore::with_entry(STORAGE_KEY, exported));
        reopened.state().validate().unwrap();
    }

    #[test]
    fn seed_is_not_written_until_a_mutation() {
        let options = StoreOptions {
            builtin_seed: vec![builtin(1, "Cardiology")],
            ..StoreOptions::default()
        };
        let store = StudyStore::initialize_with(MemoryStore::new(), options);
        assert_eq!(store.kv().get(STORAGE_KEY), None);
    }
}
