//! Outcome of a finished round.

use super::types::RoundStatus;
use serde::Serialize;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display, strum::EnumIter)]
pub enum Outcome {
    /// Every distinct letter of the secret word was guessed.
    #[strum(to_string = "won")]
    Won,
    /// The player ran out of guesses.
    #[strum(to_string = "lost")]
    Lost,
}

impl Outcome {
    /// Returns true if the round was won.
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Won)
    }
}

impl From<Outcome> for RoundStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won => RoundStatus::Won,
            Outcome::Lost => RoundStatus::Lost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_outcome_is_terminal() {
        for outcome in Outcome::iter() {
            assert_ne!(RoundStatus::from(outcome), RoundStatus::AwaitingGuess);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Outcome::Won.to_string(), "won");
        assert_eq!(Outcome::Lost.to_string(), "lost");
    }
}
