//! The per-match word pool.

use super::types::SecretWord;
use crate::config::ConfigError;
use rand::Rng;
use std::collections::BTreeSet;
use tracing::{debug, info, instrument, warn};

/// Candidate secret words for a match.
///
/// Filled once from a word source, then depleted one word per round. A word
/// is removed when drawn, so it cannot come up twice in the same match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<SecretWord>,
}

impl WordPool {
    /// Builds a pool from raw candidates.
    ///
    /// Candidates that are not valid secret words are skipped and repeats
    /// are collapsed, keeping first-seen order.
    #[instrument(skip(candidates))]
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = BTreeSet::new();
        let mut words = Vec::new();

        for candidate in candidates {
            match SecretWord::new(candidate.as_ref()) {
                Ok(word) => {
                    if seen.insert(word.clone()) {
                        words.push(word);
                    }
                }
                Err(e) => debug!(error = %e, "Skipping unusable word"),
            }
        }

        info!(words = words.len(), "Word pool ready");
        Self { words }
    }

    /// Words left in the pool.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true when no words are left.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns true if the word is still in the pool.
    pub fn contains(&self, word: &SecretWord) -> bool {
        self.words.contains(word)
    }

    /// Remaining words, in no particular order.
    pub fn words(&self) -> &[SecretWord] {
        &self.words
    }

    /// Removes and returns a uniformly random word.
    #[instrument(skip(self, rng), fields(remaining = self.words.len()))]
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Result<SecretWord, PoolError> {
        if self.words.is_empty() {
            warn!("Word pool exhausted");
            return Err(PoolError::Exhausted);
        }
        let index = rng.random_range(0..self.words.len());
        Ok(self.words.swap_remove(index))
    }

    /// Fails unless at least `needed` words are available.
    #[instrument(skip(self), fields(available = self.words.len()))]
    pub fn ensure_capacity(&self, needed: usize) -> Result<(), ConfigError> {
        if self.words.len() < needed {
            return Err(ConfigError::new(format!(
                "Word pool has {} words but the match needs {}",
                self.words.len(),
                needed
            )));
        }
        Ok(())
    }
}

/// Error drawing from the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PoolError {
    /// No words left to draw.
    #[display("Word pool is exhausted")]
    Exhausted,
}

impl std::error::Error for PoolError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_skips_unusable_and_duplicate_words() {
        let pool = WordPool::new(["guitar", "hip hop", "Guitar", "mp3", "", "drum"]);
        assert_eq!(pool.len(), 2);
        assert!(pool.contains(&SecretWord::new("guitar").unwrap()));
        assert!(pool.contains(&SecretWord::new("drum").unwrap()));
    }

    #[test]
    fn test_draw_shrinks_pool_without_repeats() {
        let mut pool = WordPool::new(["one", "two", "three", "four"]);
        let mut rng = StdRng::seed_from_u64(7);
        let mut drawn = BTreeSet::new();

        for expected_len in (0..4).rev() {
            let word = pool.draw(&mut rng).unwrap();
            assert_eq!(pool.len(), expected_len);
            assert!(!pool.contains(&word));
            assert!(drawn.insert(word));
        }
    }

    #[test]
    fn test_draw_from_empty_pool_fails() {
        let mut pool = WordPool::new(Vec::<String>::new());
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pool.draw(&mut rng), Err(PoolError::Exhausted));
    }

    #[test]
    fn test_ensure_capacity() {
        let pool = WordPool::new(["dog", "fox"]);
        assert!(pool.ensure_capacity(2).is_ok());
        assert!(pool.ensure_capacity(3).is_err());
    }
}
