use anyhow::Context;
use medstudy_config::MedStudyConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then the layered config, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<MedStudyConfig> {
    let mut config = MedStudyConfig::load_with_dotenv().context("failed to load configuration")?;
    apply_overrides(&mut config, flags);
    Ok(config)
}

fn apply_overrides(config: &mut MedStudyConfig, flags: &GlobalFlags) {
    if let Some(dir) = &flags.data_dir {
        config.storage.data_dir.clone_from(dir);
    }
}
