//! Per-player guess history and score.

use super::guess::Letter;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

/// A player's state within a match.
///
/// The score lives for the whole match. The three letter sets describe the
/// current round only and are cleared by [`PlayerState::reset`].
///
/// `guessed` is always the disjoint union of `correct` and `missed`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlayerState {
    pub(super) name: String,
    pub(super) score: u32,
    pub(super) guessed: BTreeSet<Letter>,
    pub(super) correct: BTreeSet<Letter>,
    /// Kept in guess order for display.
    pub(super) missed: Vec<Letter>,
}

impl PlayerState {
    /// Creates a player with no score and no guesses.
    #[instrument(skip(name))]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Clears the round's guesses. The score is kept.
    #[instrument(skip(self), fields(player = %self.name))]
    pub fn reset(&mut self) {
        debug!("Resetting round state");
        self.guessed.clear();
        self.correct.clear();
        self.missed.clear();
    }

    /// Records a guess as a hit or a miss.
    ///
    /// The letter must not have been guessed yet this round. Callers check
    /// with [`PlayerState::has_guessed`] first.
    #[instrument(skip(self), fields(player = %self.name))]
    pub fn record_guess(&mut self, letter: Letter, is_hit: bool) {
        debug_assert!(
            !self.guessed.contains(&letter),
            "letter {letter} recorded twice in one round"
        );
        self.guessed.insert(letter);
        if is_hit {
            self.correct.insert(letter);
        } else {
            self.missed.push(letter);
        }
    }

    /// Number of wrong guesses this round.
    pub fn miss_count(&self) -> usize {
        self.missed.len()
    }

    /// Adds one won round to the score.
    #[instrument(skip(self), fields(player = %self.name))]
    pub fn award_win(&mut self) {
        self.score += 1;
        info!(score = self.score, "Round won");
    }

    /// Returns true if the letter was already guessed this round.
    pub fn has_guessed(&self, letter: Letter) -> bool {
        self.guessed.contains(&letter)
    }

    /// Player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rounds won so far in this match.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Every letter guessed this round.
    pub fn guessed_letters(&self) -> &BTreeSet<Letter> {
        &self.guessed
    }

    /// Guessed letters found in the secret word.
    pub fn correct_letters(&self) -> &BTreeSet<Letter> {
        &self.correct
    }

    /// Guessed letters absent from the secret word, in guess order.
    pub fn missed_letters(&self) -> &[Letter] {
        &self.missed
    }
}
