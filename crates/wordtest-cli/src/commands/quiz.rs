//! The `wordtest quiz` command.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};

use wordtest_core::parser::{read_words, ParseOptions};
use wordtest_core::quiz::{run_quiz, Console};
use wordtest_core::sampler::{sample_round, SamplingMode};

pub fn execute(
    file: Option<PathBuf>,
    size: Option<usize>,
    with_replacement: bool,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = super::resolve_config(config_path.as_deref(), file)?;
    if let Some(size) = size {
        config.sample_size = size;
    }
    if with_replacement {
        config.sampling = SamplingMode::WithReplacement;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    config.validate()?;

    let path = config.words_file.clone();
    let report = read_words(&path, &ParseOptions::default())?;
    let mut vocabulary = report.vocabulary;

    let round = sample_round(&vocabulary, &config.sampler())
        .with_context(|| format!("cannot start a round from {}", path.display()))?;

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    let outcome = run_quiz(&mut vocabulary, round, &mut console, &path)?;

    tracing::info!(
        correct = outcome.summary.correct,
        total = outcome.summary.total,
        saved = outcome.saved,
        "round finished"
    );
    Ok(())
}
