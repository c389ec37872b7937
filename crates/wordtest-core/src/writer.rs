//! Writes a vocabulary back in the line format the parser reads.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Result, WordtestError};
use crate::model::{Vocabulary, WordEntry};

/// Render one entry as `word:meaning::priority`.
pub fn format_entry(entry: &WordEntry) -> String {
    format!("{}:{}::{}", entry.word, entry.meaning, entry.priority)
}

/// Serialize every entry, one per line, in vocabulary order.
pub fn write_to<W: Write>(vocabulary: &Vocabulary, mut out: W) -> std::io::Result<()> {
    for entry in vocabulary {
        writeln!(out, "{}", format_entry(entry))?;
    }
    out.flush()
}

/// Overwrite `path` with the vocabulary.
///
/// The file is truncated first; a failure part-way leaves it partially written.
pub fn write_words(vocabulary: &Vocabulary, path: &Path) -> Result<()> {
    let wrap = |source| WordtestError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(wrap)?;
    write_to(vocabulary, BufWriter::new(file)).map_err(wrap)?;

    tracing::info!(path = %path.display(), words = vocabulary.len(), "vocabulary saved");
    Ok(())
}
