//! Core data model types for wordtest.
//!
//! A [`Vocabulary`] is the single source of truth for a session. Sampling
//! hands back keys into it, and the quiz mutates priorities through it by key.

use indexmap::IndexMap;

/// Priority given to entries whose line carries no `::<priority>` suffix.
///
/// Negative priorities mean "never quizzed"; the sampler lifts them to the
/// most urgent tier.
pub const UNSET_PRIORITY: i64 = -1;

/// A single word with its meaning and drilling priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// The word being drilled. Unique within a vocabulary.
    pub word: String,
    /// What the word means. May contain `:`.
    pub meaning: String,
    /// Higher is more urgent. Negative means unseen.
    pub priority: i64,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, meaning: impl Into<String>, priority: i64) -> Self {
        Self {
            word: word.into(),
            meaning: meaning.into(),
            priority,
        }
    }

    /// Whether this entry has never been answered.
    pub fn is_unseen(&self) -> bool {
        self.priority < 0
    }

    /// Record one self-graded answer.
    pub fn record_answer(&mut self, answer: Answer) {
        self.priority = next_priority(self.priority, answer);
    }
}

/// Outcome of a self-graded answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Correct,
    Incorrect,
}

impl Answer {
    pub fn from_correct(correct: bool) -> Self {
        if correct {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }
}

/// The linear priority policy.
///
/// Unseen and settled words (priority ≤ 0) jump straight to 0 or 1. Words
/// already in the queue move one step.
pub fn next_priority(priority: i64, answer: Answer) -> i64 {
    match (priority <= 0, answer) {
        (true, Answer::Correct) => 0,
        (true, Answer::Incorrect) => 1,
        (false, Answer::Correct) => priority - 1,
        (false, Answer::Incorrect) => priority.saturating_add(1),
    }
}

/// Insertion-ordered mapping from word to entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    entries: IndexMap<String, WordEntry>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any entry with the same word.
    ///
    /// A replaced word keeps its original position. Returns the old entry.
    pub fn insert(&mut self, entry: WordEntry) -> Option<WordEntry> {
        self.entries.insert(entry.word.clone(), entry)
    }

    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.entries.get(word)
    }

    pub fn get_mut(&mut self, word: &str) -> Option<&mut WordEntry> {
        self.entries.get_mut(word)
    }

    /// Entry at a position in iteration order.
    pub fn get_index(&self, index: usize) -> Option<&WordEntry> {
        self.entries.get_index(index).map(|(_, entry)| entry)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.values()
    }

    /// Highest priority present, or `None` for an empty vocabulary.
    pub fn max_priority(&self) -> Option<i64> {
        self.iter().map(|e| e.priority).max()
    }

    /// Apply an answer to the entry for `word`. Returns the new priority, or
    /// `None` when the word is not in the vocabulary.
    pub fn record_answer(&mut self, word: &str, answer: Answer) -> Option<i64> {
        let entry = self.entries.get_mut(word)?;
        entry.record_answer(answer);
        Some(entry.priority)
    }
}

impl FromIterator<WordEntry> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = WordEntry>>(iter: I) -> Self {
        let mut vocabulary = Vocabulary::new();
        for entry in iter {
            vocabulary.insert(entry);
        }
        vocabulary
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a WordEntry;
    type IntoIter = indexmap::map::Values<'a, String, WordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

/// Keys drawn for one quiz session, in presentation order.
///
/// Holds no entry data; look words up in the [`Vocabulary`] it was drawn from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizRound {
    words: Vec<String>,
}

impl QuizRound {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_policy() {
        assert_eq!(next_priority(3, Answer::Correct), 2);
        assert_eq!(next_priority(3, Answer::Incorrect), 4);
        assert_eq!(next_priority(1, Answer::Correct), 0);
        assert_eq!(next_priority(0, Answer::Incorrect), 1);
        assert_eq!(next_priority(0, Answer::Correct), 0);
        assert_eq!(next_priority(-1, Answer::Correct), 0);
        assert_eq!(next_priority(-5, Answer::Incorrect), 1);
    }

    #[test]
    fn duplicate_insert_keeps_position() {
        let mut vocab = Vocabulary::new();
        vocab.insert(WordEntry::new("cat", "feline", 1));
        vocab.insert(WordEntry::new("dog", "canine", 2));
        let old = vocab.insert(WordEntry::new("cat", "kitty", 5));

        assert_eq!(old.map(|e| e.meaning), Some("feline".to_string()));
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.get_index(0).unwrap().meaning, "kitty");
        assert_eq!(vocab.get_index(1).unwrap().word, "dog");
    }

    #[test]
    fn record_answer_by_key() {
        let mut vocab: Vocabulary = vec![WordEntry::new("cat", "feline", UNSET_PRIORITY)]
            .into_iter()
            .collect();
        assert!(vocab.get("cat").unwrap().is_unseen());
        assert_eq!(vocab.record_answer("cat", Answer::Incorrect), Some(1));
        assert_eq!(vocab.record_answer("cat", Answer::Incorrect), Some(2));
        assert_eq!(vocab.record_answer("missing", Answer::Correct), None);
    }

    #[test]
    fn max_priority_of_empty_vocabulary() {
        assert_eq!(Vocabulary::new().max_priority(), None);
    }
}
