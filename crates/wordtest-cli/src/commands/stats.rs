//! The `wordtest stats` command.

use std::path::PathBuf;

use anyhow::Result;
use clap::ValueEnum;

use wordtest_core::parser::{read_words, ParseOptions};
use wordtest_core::statistics::VocabularyStats;

/// How `stats` prints its report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Summary line and a table, most urgent first
    Text,
    /// Pretty-printed JSON
    Json,
}

pub fn execute(file: Option<PathBuf>, format: Format, config_path: Option<PathBuf>) -> Result<()> {
    let config = super::resolve_config(config_path.as_deref(), file)?;
    let report = read_words(&config.words_file, &ParseOptions::default())?;
    let stats = VocabularyStats::compute(&report.vocabulary);

    match format {
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        Format::Text => print_table(&stats),
    }

    Ok(())
}

fn print_table(stats: &VocabularyStats) {
    use comfy_table::{Cell, Table};

    println!(
        "{} words: {} unseen, {} settled, {} struggling",
        stats.total, stats.unseen, stats.settled, stats.struggling
    );
    if stats.words.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Word", "Meaning", "Priority", "Weight", "Chance"]);

    for row in stats.by_urgency() {
        table.add_row(vec![
            Cell::new(&row.word),
            Cell::new(&row.meaning),
            Cell::new(row.priority),
            Cell::new(format!("{:.1}", row.weight)),
            Cell::new(format!("{:.1}%", row.probability * 100.0)),
        ]);
    }

    println!("{table}");
}
