//! Priority-weighted sampling of quiz rounds.
//!
//! Raw priorities are mapped to strictly positive weights:
//!
//! | priority | weight                         |
//! |----------|--------------------------------|
//! | `< 0`    | `max(max priority, 0) + 1`     |
//! | `== 0`   | `0.1`                          |
//! | `> 0`    | `priority`                     |
//!
//! Unseen words therefore share the most urgent tier, settled words still
//! come back occasionally, and every wrong answer makes a word likelier.

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WordtestError};
use crate::model::{QuizRound, Vocabulary};

/// Weight of a settled (priority 0) word.
pub const SETTLED_WEIGHT: f64 = 0.1;

/// Default number of words per round.
pub const DEFAULT_SAMPLE_SIZE: usize = 20;

/// Whether a word may be drawn more than once per round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingMode {
    #[default]
    WithoutReplacement,
    WithReplacement,
}

/// How to draw a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Words per round.
    pub size: usize,
    pub mode: SamplingMode,
    /// Fixed RNG seed for reproducible rounds. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SAMPLE_SIZE,
            mode: SamplingMode::default(),
            seed: None,
        }
    }
}

impl SamplerConfig {
    /// The RNG this config asks for.
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        }
    }
}

/// Sampling weight for one priority, given the vocabulary's highest priority.
pub fn sampling_weight(priority: i64, max_priority: i64) -> f64 {
    if priority < 0 {
        max_priority.max(0) as f64 + 1.0
    } else if priority == 0 {
        SETTLED_WEIGHT
    } else {
        priority as f64
    }
}

/// Relative weights for every entry, in vocabulary order.
pub fn weights(vocabulary: &Vocabulary) -> Vec<f64> {
    let max_priority = vocabulary.max_priority().unwrap_or(0);
    vocabulary
        .iter()
        .map(|e| sampling_weight(e.priority, max_priority))
        .collect()
}

/// Weights scaled to sum to 1. Empty for an empty vocabulary.
pub fn probabilities(vocabulary: &Vocabulary) -> Vec<f64> {
    let mut w = weights(vocabulary);
    let total: f64 = w.iter().sum();
    if total > 0.0 {
        for p in &mut w {
            *p /= total;
        }
    }
    w
}

/// Draw a round using the RNG described by `config`.
pub fn sample_round(vocabulary: &Vocabulary, config: &SamplerConfig) -> Result<QuizRound> {
    sample_round_with(vocabulary, config, &mut config.rng())
}

/// Draw a round with a caller-supplied RNG.
pub fn sample_round_with<R: Rng + ?Sized>(
    vocabulary: &Vocabulary,
    config: &SamplerConfig,
    rng: &mut R,
) -> Result<QuizRound> {
    let available = vocabulary.len();
    let insufficient = match config.mode {
        SamplingMode::WithoutReplacement => config.size > available,
        SamplingMode::WithReplacement => config.size > 0 && available == 0,
    };
    if insufficient {
        return Err(WordtestError::InsufficientVocabulary {
            requested: config.size,
            available,
        });
    }
    if config.size == 0 {
        return Ok(QuizRound::default());
    }

    let weights = weights(vocabulary);
    let indices = match config.mode {
        SamplingMode::WithoutReplacement => draw_distinct(&weights, config.size, rng)?,
        SamplingMode::WithReplacement => draw_repeated(&weights, config.size, rng)?,
    };

    let words: Vec<String> = indices
        .into_iter()
        .filter_map(|i| vocabulary.get_index(i).map(|e| e.word.clone()))
        .collect();

    tracing::debug!(
        requested = config.size,
        available,
        mode = ?config.mode,
        "sampled quiz round"
    );
    Ok(QuizRound::new(words))
}

/// Sequential draws, zeroing each pick's weight before the next.
///
/// Fails if the weights cannot cover `count` distinct picks.
fn draw_distinct<R: Rng + ?Sized>(
    weights: &[f64],
    count: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    let mut dist = WeightedIndex::new(weights)?;
    let mut picked = Vec::with_capacity(count);

    for n in 0..count {
        let idx = dist.sample(rng);
        picked.push(idx);
        // The last pick is never zeroed: that could leave an all-zero table.
        if n + 1 < count {
            dist.update_weights(&[(idx, &0.0)])?;
        }
    }
    Ok(picked)
}

/// Independent draws from the same distribution.
fn draw_repeated<R: Rng + ?Sized>(
    weights: &[f64],
    count: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    let dist = WeightedIndex::new(weights)?;
    Ok(dist.sample_iter(rng).take(count).collect())
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;
    use crate::model::WordEntry;

    fn vocab(priorities: &[i64]) -> Vocabulary {
        priorities
            .iter()
            .enumerate()
            .map(|(i, &p)| WordEntry::new(format!("w{i}"), format!("meaning {i}"), p))
            .collect()
    }

    fn config(size: usize, mode: SamplingMode) -> SamplerConfig {
        SamplerConfig {
            size,
            mode,
            seed: Some(7),
        }
    }

    #[test]
    fn weights_are_always_positive() {
        let v = vocab(&[-5, -1, 0, 1, 7]);
        let w = weights(&v);
        assert!(w.iter().all(|&x| x > 0.0));
        assert_eq!(w, vec![8.0, 8.0, 0.1, 1.0, 7.0]);
    }

    #[test]
    fn unseen_weight_floors_max_at_zero() {
        assert_eq!(sampling_weight(-1, -3), 1.0);
        assert_eq!(sampling_weight(-1, 0), 1.0);
        assert_eq!(sampling_weight(-2, 4), 5.0);
        assert_eq!(sampling_weight(0, 10), SETTLED_WEIGHT);
        assert_eq!(sampling_weight(3, 10), 3.0);
    }

    #[test]
    fn probabilities_sum_to_one() {
        let p = probabilities(&vocab(&[-1, 0, 2, 5]));
        let total: f64 = p.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(probabilities(&Vocabulary::new()).is_empty());
    }

    #[test]
    fn without_replacement_returns_distinct_words() {
        let v = vocab(&[-1, 0, 0, 3, 1, 2, -1, 0]);
        for size in 0..=v.len() {
            let round =
                sample_round(&v, &config(size, SamplingMode::WithoutReplacement)).unwrap();
            assert_eq!(round.len(), size);
            let unique: HashSet<_> = round.words().iter().collect();
            assert_eq!(unique.len(), size);
            assert!(round.words().iter().all(|w| v.contains(w)));
        }
    }

    #[test]
    fn without_replacement_rejects_oversized_round() {
        let v = vocab(&[1, 2, 3]);
        let result = sample_round(&v, &config(4, SamplingMode::WithoutReplacement));
        assert!(matches!(
            result,
            Err(WordtestError::InsufficientVocabulary {
                requested: 4,
                available: 3
            })
        ));
    }

    #[test]
    fn with_replacement_may_exceed_vocabulary() {
        let v = vocab(&[1, 2]);
        let round = sample_round(&v, &config(10, SamplingMode::WithReplacement)).unwrap();
        assert_eq!(round.len(), 10);

        let empty = sample_round(&Vocabulary::new(), &config(1, SamplingMode::WithReplacement));
        assert!(empty.is_err());
    }

    #[test]
    fn draws_never_come_back_short() {
        let mut rng = SmallRng::seed_from_u64(3);

        let picked = draw_distinct(&[0.1, 0.1, 0.1], 3, &mut rng).unwrap();
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), 3);

        // Two usable weights cannot yield three distinct picks.
        assert!(matches!(
            draw_distinct(&[1.0, 0.0, 2.0], 3, &mut rng),
            Err(WordtestError::Weights(_))
        ));
        assert!(matches!(
            draw_repeated(&[0.0, 0.0], 2, &mut rng),
            Err(WordtestError::Weights(_))
        ));
    }

    #[test]
    fn same_seed_same_round() {
        let v = vocab(&[-1, 0, 4, 2, 1, 0, 0, 9]);
        let cfg = config(5, SamplingMode::WithoutReplacement);
        let a = sample_round(&v, &cfg).unwrap();
        let b = sample_round(&v, &cfg).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn urgent_words_are_drawn_more_often() {
        let v = vocab(&[0, 9]);
        let mut rng = SmallRng::seed_from_u64(42);
        let cfg = SamplerConfig {
            size: 1,
            mode: SamplingMode::WithoutReplacement,
            seed: None,
        };

        let mut counts: HashMap<String, usize> = HashMap::new();
        for _ in 0..2000 {
            let round = sample_round_with(&v, &cfg, &mut rng).unwrap();
            *counts.entry(round.words()[0].clone()).or_default() += 1;
        }
        // Expected share of w1 is 9 / 9.1, roughly 99%.
        assert!(counts.get("w1").copied().unwrap_or(0) > 1900);
        assert!(counts.get("w0").copied().unwrap_or(0) < 100);
    }
}
