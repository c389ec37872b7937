//! Configuration file loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::sampler::{SamplerConfig, SamplingMode, DEFAULT_SAMPLE_SIZE};

/// Environment variable that overrides [`WordtestConfig::words_file`].
pub const WORDS_FILE_ENV: &str = "WORDTEST_WORDS_FILE";

/// Top-level wordtest configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordtestConfig {
    /// Vocabulary file to drill.
    #[serde(default = "default_words_file")]
    pub words_file: PathBuf,
    /// Words per round.
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    /// Whether a word may come up twice in one round.
    #[serde(default)]
    pub sampling: SamplingMode,
    /// Fixed RNG seed; unset draws a fresh round every run.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_words_file() -> PathBuf {
    PathBuf::from("words.txt")
}
fn default_sample_size() -> usize {
    DEFAULT_SAMPLE_SIZE
}

impl Default for WordtestConfig {
    fn default() -> Self {
        Self {
            words_file: default_words_file(),
            sample_size: default_sample_size(),
            sampling: SamplingMode::default(),
            seed: None,
        }
    }
}

impl WordtestConfig {
    /// Sampler settings for a round.
    pub fn sampler(&self) -> SamplerConfig {
        SamplerConfig {
            size: self.sample_size,
            mode: self.sampling,
            seed: self.seed,
        }
    }

    /// Reject settings no round can satisfy.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.sample_size >= 1, "sample_size must be at least 1");
        Ok(())
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `wordtest.toml` in the current directory
/// 2. `~/.config/wordtest/config.toml`
///
/// `WORDTEST_WORDS_FILE` overrides the vocabulary path.
pub fn load_config_from(path: Option<&Path>) -> Result<WordtestConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("wordtest.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => WordtestConfig::default(),
    };

    if let Ok(file) = std::env::var(WORDS_FILE_ENV) {
        if !file.is_empty() {
            config.words_file = PathBuf::from(file);
        }
    }

    Ok(config)
}

/// Parse configuration TOML.
pub fn parse_config(content: &str) -> Result<WordtestConfig> {
    let config: WordtestConfig = toml::from_str(content)?;
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("wordtest"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = WordtestConfig::default();
        assert_eq!(config.words_file, PathBuf::from("words.txt"));
        assert_eq!(config.sample_size, 20);
        assert_eq!(config.sampling, SamplingMode::WithoutReplacement);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
words_file = "german.txt"
sample_size = 5
sampling = "with_replacement"
seed = 42
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.words_file, PathBuf::from("german.txt"));
        assert_eq!(
            config.sampler(),
            SamplerConfig {
                size: 5,
                mode: SamplingMode::WithReplacement,
                seed: Some(42),
            }
        );
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = parse_config("sample_size = 3\n").unwrap();
        assert_eq!(config.words_file, PathBuf::from("words.txt"));
        assert_eq!(config.sample_size, 3);
    }

    #[test]
    fn zero_sample_size_is_invalid() {
        let config = parse_config("sample_size = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_sampling_mode_is_rejected() {
        assert!(parse_config("sampling = \"sometimes\"\n").is_err());
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config_from(Some(&dir.path().join("nope.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn explicit_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wordtest.toml");
        std::fs::write(&path, "sample_size = 7\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.sample_size, 7);
    }
}
