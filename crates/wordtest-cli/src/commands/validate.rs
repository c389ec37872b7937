//! The `wordtest validate` command.

use std::path::PathBuf;

use anyhow::Result;

use wordtest_core::parser::{read_words, ParseOptions};

pub fn execute(file: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = super::resolve_config(config_path.as_deref(), file)?;
    let report = read_words(&config.words_file, &ParseOptions::default())?;

    println!(
        "Vocabulary: {} ({} words)",
        config.words_file.display(),
        report.vocabulary.len()
    );

    for w in &report.warnings {
        println!("  WARNING: {w}");
    }
    for o in &report.overwritten {
        println!(
            "  [{}] NOTE: line {} replaces an earlier entry",
            o.word, o.line
        );
    }

    if report.warnings.is_empty() {
        println!("All lines valid.");
    } else {
        println!("\n{} warning(s) found.", report.warnings.len());
    }

    Ok(())
}
