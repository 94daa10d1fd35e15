//! Shared test utilities for medstudy-store unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use medstudy_core::entities::{AppState, Discipline, Settings, StudyRecord};

    use crate::kv::MemoryStore;
    use crate::service::{StoreOptions, StudyStore};

    /// A built-in discipline with a single topic.
    pub fn builtin(id: i64, name: &str) -> Discipline {
        Discipline {
            id,
            name: name.to_string(),
            topics: vec!["General".to_string()],
            is_custom: false,
        }
    }

    /// A small valid document touching every section.
    pub fn sample_state() -> AppState {
        AppState {
            disciplines: vec![builtin(1, "Cardiology"), builtin(2, "Pharmacology")],
            custom_disciplines: vec![Discipline {
                id: 1_700_000_000_000,
                name: "Anatomy".into(),
                topics: vec!["Bones".into(), "Joints".into()],
                is_custom: true,
            }],
            studies: vec![StudyRecord {
                id: 1_700_000_000_001,
                discipline_name: "Anatomy".into(),
                topic: "Bones".into(),
                total_questions: 20,
                correct_answers: 17,
                date: "2026-05-10".into(),
                duration_minutes: 45,
                notes: String::new(),
            }],
            settings: Settings { daily_goal: 4 },
        }
    }

    /// Empty store over a fresh in-memory collaborator.
    pub fn memory_store() -> StudyStore<MemoryStore> {
        StudyStore::initialize(MemoryStore::new())
    }

    /// Empty store with the given built-in disciplines seeded (IDs from 1).
    pub fn seeded_store(names: &[&str]) -> StudyStore<MemoryStore> {
        let options = StoreOptions {
            builtin_seed: names
                .iter()
                .zip(1_i64..)
                .map(|(name, id)| builtin(id, name))
                .collect(),
            ..StoreOptions::default()
        };
        StudyStore::initialize_with(MemoryStore::new(), options)
    }

    /// Empty store whose every write fails.
    pub fn failing_store(rollback_on_save_failure: bool) -> StudyStore<MemoryStore> {
        let options = StoreOptions {
            rollback_on_save_failure,
            ..StoreOptions::default()
        };
        let mut store = StudyStore::initialize_with(MemoryStore::new(), options);
        store.kv_mut().set_fail_writes(true);
        store
    }
}
