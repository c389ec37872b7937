//! Error types for wordtest-core.
//!
//! Malformed vocabulary lines are not errors; they surface as
//! [`ParseWarning`](crate::parser::ParseWarning)s. Everything here aborts the
//! current command.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`WordtestError`].
pub type Result<T> = std::result::Result<T, WordtestError>;

/// Fatal errors raised while loading, sampling, quizzing or saving.
#[derive(Debug, Error)]
pub enum WordtestError {
    /// The vocabulary file does not exist.
    #[error("vocabulary file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The vocabulary file exists but could not be read.
    #[error("failed to read {}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// More words were requested than the vocabulary can supply.
    #[error("cannot sample {requested} words from a vocabulary of {available}")]
    InsufficientVocabulary { requested: usize, available: usize },

    /// Writing the vocabulary back to disk failed.
    #[error("failed to write {}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Standard input ended while a prompt was waiting for an answer.
    #[error("input closed before the quiz finished")]
    InputClosed,

    /// The weight table could not be built or updated.
    #[error("invalid sampling weights")]
    Weights(#[from] rand::distributions::WeightedError),

    /// Terminal I/O failed.
    #[error("terminal I/O error")]
    Io(#[from] std::io::Error),
}
