//! Round scoring and vocabulary-wide statistics.

use serde::{Deserialize, Serialize};

use crate::model::Vocabulary;
use crate::sampler::{probabilities, weights};

/// Result of one quiz round.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Number of answers graded correct.
    pub correct: usize,
    /// Number of words presented.
    pub total: usize,
    /// Words answered wrong, with their meanings, in presentation order.
    pub wrong: Vec<MissedWord>,
}

/// A word the user got wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissedWord {
    pub word: String,
    pub meaning: String,
}

impl RoundSummary {
    /// Share of correct answers in percent. An empty round scores 0.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }

    pub fn record(&mut self, word: &str, meaning: &str, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
        } else {
            self.wrong.push(MissedWord {
                word: word.to_string(),
                meaning: meaning.to_string(),
            });
        }
    }
}

/// Per-entry row used by `wordtest stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordStats {
    pub word: String,
    pub meaning: String,
    pub priority: i64,
    /// Relative sampling weight.
    pub weight: f64,
    /// Chance of being the first word drawn.
    pub probability: f64,
}

/// Aggregate view of a vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VocabularyStats {
    pub total: usize,
    /// Never answered (priority < 0).
    pub unseen: usize,
    /// Last answered correctly from a low priority (priority == 0).
    pub settled: usize,
    /// Still in the queue (priority > 0).
    pub struggling: usize,
    pub max_priority: Option<i64>,
    /// One row per entry, in vocabulary order.
    pub words: Vec<WordStats>,
}

impl VocabularyStats {
    pub fn compute(vocabulary: &Vocabulary) -> Self {
        let max_priority = vocabulary.max_priority();
        let weights = weights(vocabulary);
        let probabilities = probabilities(vocabulary);

        let mut stats = VocabularyStats {
            total: vocabulary.len(),
            max_priority,
            ..Default::default()
        };

        let rows = vocabulary.iter().zip(weights).zip(probabilities);
        for ((entry, weight), probability) in rows {
            match entry.priority {
                _ if entry.is_unseen() => stats.unseen += 1,
                0 => stats.settled += 1,
                _ => stats.struggling += 1,
            }
            stats.words.push(WordStats {
                word: entry.word.clone(),
                meaning: entry.meaning.clone(),
                priority: entry.priority,
                weight,
                probability,
            });
        }

        stats
    }

    /// Rows ordered most urgent first. Ties keep vocabulary order.
    pub fn by_urgency(&self) -> Vec<&WordStats> {
        let mut rows: Vec<&WordStats> = self.words.iter().collect();
        rows.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WordEntry;

    #[test]
    fn percentage_of_round() {
        let mut summary = RoundSummary::default();
        summary.record("cat", "feline", true);
        summary.record("dog", "canine", false);
        summary.record("cow", "bovine", true);
        summary.record("owl", "bird", true);

        assert_eq!(summary.correct, 3);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.percentage(), 75.0);
        assert_eq!(
            summary.wrong,
            vec![MissedWord {
                word: "dog".into(),
                meaning: "canine".into()
            }]
        );
    }

    #[test]
    fn empty_round_scores_zero() {
        assert_eq!(RoundSummary::default().percentage(), 0.0);
    }

    #[test]
    fn tiers_and_probabilities() {
        let vocab: Vocabulary = vec![
            WordEntry::new("a", "1", -1),
            WordEntry::new("b", "2", 0),
            WordEntry::new("c", "3", 3),
            WordEntry::new("d", "4", -1),
        ]
        .into_iter()
        .collect();

        let stats = VocabularyStats::compute(&vocab);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.unseen, 2);
        assert_eq!(stats.settled, 1);
        assert_eq!(stats.struggling, 1);
        assert_eq!(stats.max_priority, Some(3));

        let total: f64 = stats.words.iter().map(|w| w.probability).sum();
        assert!((total - 1.0).abs() < 1e-9);

        let order: Vec<&str> = stats.by_urgency().iter().map(|w| w.word.as_str()).collect();
        assert_eq!(order, vec!["a", "d", "c", "b"]);
    }

    #[test]
    fn odds_match_the_sampler() {
        let vocab: Vocabulary = [-3, 0, 2, 7, 0]
            .iter()
            .enumerate()
            .map(|(i, &p)| WordEntry::new(format!("w{i}"), "m", p))
            .collect();

        let stats = VocabularyStats::compute(&vocab);
        let weights: Vec<f64> = stats.words.iter().map(|w| w.weight).collect();
        let odds: Vec<f64> = stats.words.iter().map(|w| w.probability).collect();
        assert_eq!(weights, crate::sampler::weights(&vocab));
        assert_eq!(odds, crate::sampler::probabilities(&vocab));
    }

    #[test]
    fn stats_of_empty_vocabulary() {
        let stats = VocabularyStats::compute(&Vocabulary::new());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.max_priority, None);
        assert!(stats.words.is_empty());
    }
}
