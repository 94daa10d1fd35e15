use medstudy_config::MedStudyConfig;
use medstudy_core::ids::STORAGE_KEY;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &MedStudyConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &MedStudyConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    let storage_is_default = config.storage.data_dir.is_empty()
        && config.storage.seed_path.is_empty()
        && config.storage.key == STORAGE_KEY;
    if storage_is_default && has_single_underscore_key(&env_keys, "MEDSTUDY_STORAGE") {
        warnings.push(
            "Storage config appears default while MEDSTUDY_STORAGE_* env vars exist. Use double underscores (example: MEDSTUDY_STORAGE__DATA_DIR)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "MEDSTUDY_GENERAL") {
        warnings.push(
            "MEDSTUDY_GENERAL_* env vars are ignored. Use double underscores (example: MEDSTUDY_GENERAL__ROLLBACK_ON_SAVE_FAILURE)."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    let nested = format!("{section}__");
    let single = format!("{section}_");
    keys.iter()
        .any(|key| key.starts_with(&single) && !key.starts_with(&nested))
}

#[cfg(test)]
mod tests {
    use medstudy_config::MedStudyConfig;

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_single_underscore_keys() {
        let config = MedStudyConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("MEDSTUDY_STORAGE_DATA_DIR".to_string(), "/tmp/x".to_string()),
                (
                    "MEDSTUDY_GENERAL_DEFAULT_LIMIT".to_string(),
                    "5".to_string(),
                ),
            ],
        );

        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn does_not_warn_for_nested_keys() {
        let mut config = MedStudyConfig::default();
        config.storage.data_dir = "/tmp/x".to_string();

        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("MEDSTUDY_STORAGE__DATA_DIR".to_string(), "/tmp/x".to_string()),
                (
                    "MEDSTUDY_GENERAL__DEFAULT_LIMIT".to_string(),
                    "5".to_string(),
                ),
                ("MEDSTUDY_LOG".to_string(), "debug".to_string()),
            ],
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn storage_warning_skipped_once_configured() {
        let mut config = MedStudyConfig::default();
        config.storage.data_dir = "/from/flag".to_string();

        let warnings = collect_unconfigured_warnings(
            &config,
            vec![("MEDSTUDY_STORAGE_DATA_DIR".to_string(), "/tmp/x".to_string())],
        );

        assert!(warnings.is_empty());
    }
}
