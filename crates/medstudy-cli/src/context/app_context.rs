use std::path::Path;

use anyhow::Context;
use medstudy_config::MedStudyConfig;
use medstudy_store::seed::load_seed_file;
use medstudy_store::{JsonFileStore, StoreOptions, StudyStore};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub store: StudyStore<JsonFileStore>,
    pub config: MedStudyConfig,
}

impl AppContext {
    /// Open the file-backed study store described by `config`.
    pub fn init(config: MedStudyConfig) -> anyhow::Result<Self> {
        let data_dir = config.storage.resolved_data_dir();
        let kv = JsonFileStore::new(&data_dir)
            .with_context(|| format!("failed to open data directory {}", data_dir.display()))?;

        let builtin_seed = if config.storage.has_seed() {
            load_seed_file(Path::new(&config.storage.seed_path))?
        } else {
            Vec::new()
        };

        let options = StoreOptions {
            key: config.storage.key.clone(),
            rollback_on_save_failure: config.general.rollback_on_save_failure,
            builtin_seed,
        };
        tracing::debug!(
            data_dir = %data_dir.display(),
            key = %options.key,
            seeded = !options.builtin_seed.is_empty(),
            "opening study store"
        );

        let store = StudyStore::initialize_with(kv, options);
        Ok(Self { store, config })
    }
}

#[cfg(test)]
mod tests {
    use medstudy_config::MedStudyConfig;

    use super::AppContext;

    fn config_in(dir: &std::path::Path) -> MedStudyConfig {
        let mut config = MedStudyConfig::default();
        config.storage.data_dir = dir.to_string_lossy().into_owned();
        config
    }

    #[test]
    fn init_creates_data_dir() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let dir = tmp.path().join("data");
        let ctx = AppContext::init(config_in(&dir)).expect("context should open");
        assert!(dir.is_dir());
        assert!(ctx.store.list_all_disciplines().is_empty());
    }

    #[test]
    fn init_installs_seed() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let seed = tmp.path().join("seed.json");
        std::fs::write(&seed, r#"[{"nome": "Cardiology", "assuntos": ["Arrhythmias"]}]"#)
            .expect("write seed");

        let mut config = config_in(&tmp.path().join("data"));
        config.storage.seed_path = seed.to_string_lossy().into_owned();

        let ctx = AppContext::init(config).expect("context should open");
        assert!(ctx.store.find_discipline("Cardiology").is_some());
    }

    #[test]
    fn init_fails_on_bad_seed() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let mut config = config_in(&tmp.path().join("data"));
        config.storage.seed_path = tmp.path().join("missing.json").to_string_lossy().into_owned();

        assert!(AppContext::init(config).is_err());
    }
}
