//! Vocabulary file parser.
//!
//! # Format
//! ```text
//! cat:a feline animal::2
//! dog:a canine animal
//! ratio:proportion: a to b::0
//! ```
//!
//! Each non-blank line is `<word>:<meaning>[::<priority>]`. The word ends at
//! the first `:`. The priority, when present, is the integer after the last
//! `::`; any other `::` belongs to the meaning.

use std::fmt;
use std::path::Path;

use crate::error::{Result, WordtestError};
use crate::model::{Vocabulary, WordEntry, UNSET_PRIORITY};

/// Knobs for the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Priority assigned when a line has no `::<priority>` suffix.
    pub default_priority: i64,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            default_priority: UNSET_PRIORITY,
        }
    }
}

/// Why a line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// No `:` between word and meaning.
    MissingSeparator,
    /// Nothing before the first `:`.
    EmptyWord,
    /// The priority suffix is an integer too large for `i64`.
    PriorityOutOfRange,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::MissingSeparator => write!(f, "missing ':' separator"),
            WarningKind::EmptyWord => write!(f, "empty word"),
            WarningKind::PriorityOutOfRange => write!(f, "priority out of range"),
        }
    }
}

/// A skipped, malformed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// File name (or other label) the line came from.
    pub source: String,
    /// 1-based line number.
    pub line: usize,
    /// The offending line, trimmed.
    pub content: String,
    pub kind: WarningKind,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, line {}: {}: `{}` (expected `<word>:<meaning>[::<priority>]`)",
            self.source, self.line, self.kind, self.content
        )
    }
}

/// A word that appeared more than once. The later line won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overwrite {
    pub word: String,
    /// 1-based line number of the winning occurrence.
    pub line: usize,
}

/// Everything the parser learned from one file.
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    pub vocabulary: Vocabulary,
    pub warnings: Vec<ParseWarning>,
    pub overwritten: Vec<Overwrite>,
}

/// Read and parse a vocabulary file.
///
/// Malformed lines are logged and collected in the report. Only a missing or
/// unreadable file is an error.
pub fn read_words(path: &Path, options: &ParseOptions) -> Result<ParseReport> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            WordtestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            WordtestError::ReadFailed {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let report = parse_words(&content, &path.display().to_string(), options);
    tracing::debug!(
        path = %path.display(),
        words = report.vocabulary.len(),
        skipped = report.warnings.len(),
        "vocabulary loaded"
    );
    Ok(report)
}

/// Parse vocabulary text. `source` labels warnings.
pub fn parse_words(content: &str, source: &str, options: &ParseOptions) -> ParseReport {
    let mut report = ParseReport::default();

    for (idx, raw) in content.lines().enumerate() {
        let line_num = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Ok(parsed) => {
                let entry = WordEntry::new(
                    parsed.word,
                    parsed.meaning,
                    parsed.priority.unwrap_or(options.default_priority),
                );
                if report.vocabulary.insert(entry).is_some() {
                    report.overwritten.push(Overwrite {
                        word: parsed.word.to_string(),
                        line: line_num,
                    });
                }
            }
            Err(kind) => {
                let warning = ParseWarning {
                    source: source.to_string(),
                    line: line_num,
                    content: line.to_string(),
                    kind,
                };
                tracing::warn!("skipping malformed line: {warning}");
                report.warnings.push(warning);
            }
        }
    }

    report
}

/// The three parts of a well-formed line, trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub word: &'a str,
    pub meaning: &'a str,
    pub priority: Option<i64>,
}

/// Split one trimmed, non-blank line into its parts.
pub fn parse_line(line: &str) -> std::result::Result<ParsedLine<'_>, WarningKind> {
    let (word, rest) = line
        .split_once(':')
        .ok_or(WarningKind::MissingSeparator)?;

    let word = word.trim();
    if word.is_empty() {
        return Err(WarningKind::EmptyWord);
    }

    let (meaning, priority) = split_priority(rest)?;
    Ok(ParsedLine {
        word,
        meaning: meaning.trim(),
        priority,
    })
}

fn split_priority(rest: &str) -> std::result::Result<(&str, Option<i64>), WarningKind> {
    let Some((meaning, suffix)) = rest.rsplit_once("::") else {
        return Ok((rest, None));
    };

    let suffix = suffix.trim();
    if suffix.is_empty() {
        return Ok((meaning, None));
    }
    if !is_integer_literal(suffix) {
        return Ok((rest, None));
    }

    suffix
        .parse::<i64>()
        .map(|p| (meaning, Some(p)))
        .map_err(|_| WarningKind::PriorityOutOfRange)
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
