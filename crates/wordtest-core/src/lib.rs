//! wordtest-core — vocabulary parsing, weighted sampling and the quiz engine.
//!
//! The flow of a session is: [`parser::read_words`] builds a
//! [`model::Vocabulary`], [`sampler::sample_round`] picks the words to ask,
//! [`quiz::run_quiz`] grades them and [`writer::write_words`] saves the new
//! priorities when the user asks for it.

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod quiz;
pub mod sampler;
pub mod statistics;
pub mod writer;

pub use error::{Result, WordtestError};
pub use model::{Answer, QuizRound, Vocabulary, WordEntry, UNSET_PRIORITY};
pub use parser::{parse_words, read_words, ParseOptions, ParseReport, ParseWarning};
pub use quiz::{run_quiz, Console, Prompter, QuizOutcome, QuizSession, QuizState};
pub use sampler::{sample_round, SamplerConfig, SamplingMode};
pub use statistics::{RoundSummary, VocabularyStats};
pub use writer::write_words;
