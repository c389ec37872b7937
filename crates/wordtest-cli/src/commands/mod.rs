pub mod init;
pub mod quiz;
pub mod stats;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::Result;

use wordtest_core::config::{load_config_from, WordtestConfig};

/// Load config and apply a `--file` override.
fn resolve_config(config_path: Option<&Path>, file: Option<PathBuf>) -> Result<WordtestConfig> {
    let mut config = load_config_from(config_path)?;
    if let Some(file) = file {
        config.words_file = file;
    }
    Ok(config)
}
