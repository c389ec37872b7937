//! Interactive quiz session.
//!
//! A session walks the sampled words through a small state machine:
//!
//! ```text
//! Presenting(i) -> AwaitingAnswer(i) -> Scoring(i) -> Presenting(i + 1)
//!                                                  \-> Summarizing -> OfferSave -> Done
//! ```
//!
//! Priorities change in the vocabulary as each answer is scored. They reach
//! disk only if the user accepts the save prompt; otherwise the session puts
//! the old values back.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::error::{Result, WordtestError};
use crate::model::{Answer, QuizRound, Vocabulary};
use crate::statistics::RoundSummary;
use crate::writer::write_words;

/// Line-oriented conversation with the user.
pub trait Prompter {
    /// Show `text` and read one line of input. `None` means input ended.
    fn ask(&mut self, text: &str) -> Result<Option<String>>;

    /// Show a line of output.
    fn say(&mut self, text: &str) -> Result<()>;
}

/// [`Prompter`] over any reader and writer, usually stdin and stdout.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Prompter for Console<R, W> {
    fn ask(&mut self, text: &str) -> Result<Option<String>> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}

/// Ask a yes/no question until the answer is understood.
///
/// An empty answer picks `default`. End of input is [`WordtestError::InputClosed`].
pub fn confirm(prompter: &mut dyn Prompter, question: &str, default: bool) -> Result<bool> {
    let options = if default { "[Y/n]" } else { "[y/N]" };
    let text = format!("{question} {options}");
    loop {
        let Some(response) = prompter.ask(&text)? else {
            return Err(WordtestError::InputClosed);
        };
        match response.trim().to_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => continue,
        }
    }
}

/// Where a session is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    /// Asking for the meaning of the i-th word.
    Presenting(usize),
    /// Showing the meaning and waiting for self-grading.
    AwaitingAnswer(usize),
    /// Applying the grade to the word's priority.
    Scoring { index: usize, correct: bool },
    Summarizing,
    OfferSave,
    Done,
}

/// What a finished session reports.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizOutcome {
    pub summary: RoundSummary,
    /// Whether the updated priorities were written.
    pub saved: bool,
}

/// One pass over a sampled round.
pub struct QuizSession<'a> {
    vocabulary: &'a mut Vocabulary,
    round: QuizRound,
    /// Priorities as loaded, for words whose priority changed.
    original: Vec<(String, i64)>,
    summary: RoundSummary,
    state: QuizState,
    saved: bool,
}

impl<'a> QuizSession<'a> {
    pub fn new(vocabulary: &'a mut Vocabulary, round: QuizRound) -> Self {
        let state = if round.is_empty() {
            QuizState::Summarizing
        } else {
            QuizState::Presenting(0)
        };
        Self {
            vocabulary,
            round,
            original: Vec::new(),
            summary: RoundSummary::default(),
            state,
            saved: false,
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn summary(&self) -> &RoundSummary {
        &self.summary
    }

    /// Drive the session to completion. Accepted saves go to `path`.
    pub fn run(mut self, prompter: &mut dyn Prompter, path: &Path) -> Result<QuizOutcome> {
        while self.state != QuizState::Done {
            self.step(prompter, path)?;
        }
        Ok(QuizOutcome {
            summary: self.summary,
            saved: self.saved,
        })
    }

    /// Advance one state.
    pub fn step(&mut self, prompter: &mut dyn Prompter, path: &Path) -> Result<QuizState> {
        self.state = match self.state {
            QuizState::Presenting(index) => {
                let word = &self.round.words()[index];
                if !self.vocabulary.contains(word) {
                    tracing::warn!(word = %word, "sampled word missing from vocabulary, skipping");
                    self.after(index)
                } else {
                    let question = format!("{}. What is the meaning of '{}'?", index + 1, word);
                    // The typed answer is not checked; the user grades themselves next.
                    if prompter.ask(&question)?.is_none() {
                        return Err(WordtestError::InputClosed);
                    }
                    QuizState::AwaitingAnswer(index)
                }
            }
            QuizState::AwaitingAnswer(index) => {
                let word = &self.round.words()[index];
                let meaning = self
                    .vocabulary
                    .get(word)
                    .map(|e| e.meaning.as_str())
                    .unwrap_or_default();
                let question =
                    format!("The meaning for {word} is {meaning}. Did you get it right?");
                let correct = confirm(prompter, &question, true)?;
                prompter.say("")?;
                QuizState::Scoring { index, correct }
            }
            QuizState::Scoring { index, correct } => {
                self.score(index, correct);
                self.after(index)
            }
            QuizState::Summarizing => {
                self.print_summary(prompter)?;
                QuizState::OfferSave
            }
            QuizState::OfferSave => {
                if confirm(prompter, "Save progress?", true)? {
                    write_words(self.vocabulary, path)?;
                    self.saved = true;
                    prompter.say("Saved!")?;
                } else {
                    self.restore();
                    prompter.say("Current round discarded.")?;
                }
                QuizState::Done
            }
            QuizState::Done => QuizState::Done,
        };
        Ok(self.state)
    }

    fn after(&self, index: usize) -> QuizState {
        if index + 1 < self.round.len() {
            QuizState::Presenting(index + 1)
        } else {
            QuizState::Summarizing
        }
    }

    fn score(&mut self, index: usize, correct: bool) {
        let word = self.round.words()[index].clone();
        let Some(entry) = self.vocabulary.get(&word) else {
            return;
        };
        let before = entry.priority;
        let meaning = entry.meaning.clone();

        if !self.original.iter().any(|(w, _)| *w == word) {
            self.original.push((word.clone(), before));
        }
        if let Some(after) = self
            .vocabulary
            .record_answer(&word, Answer::from_correct(correct))
        {
            tracing::debug!(word = %word, before, after, correct, "priority updated");
        }

        self.summary.record(&word, &meaning, correct);
    }

    fn print_summary(&self, prompter: &mut dyn Prompter) -> Result<()> {
        prompter.say(&format!(
            "You got {} out of {} words. That is {:.1}%.",
            self.summary.correct,
            self.summary.total,
            self.summary.percentage()
        ))?;

        if !self.summary.wrong.is_empty() {
            prompter.say("You need to practice more with following words:")?;
            for missed in &self.summary.wrong {
                prompter.say(&format!("{}: {}", missed.word, missed.meaning))?;
            }
        }
        prompter.say("")
    }

    fn restore(&mut self) {
        for (word, priority) in self.original.drain(..) {
            if let Some(entry) = self.vocabulary.get_mut(&word) {
                entry.priority = priority;
            }
        }
    }
}

/// Run a whole session for `round` against `vocabulary`.
pub fn run_quiz(
    vocabulary: &mut Vocabulary,
    round: QuizRound,
    prompter: &mut dyn Prompter,
    path: &Path,
) -> Result<QuizOutcome> {
    QuizSession::new(vocabulary, round).run(prompter, path)
}
