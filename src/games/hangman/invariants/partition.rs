//! Partition invariant: guessed letters split exactly into hits and misses.

use super::super::RoundInProgress;
use super::Invariant;
use std::collections::BTreeSet;

/// Invariant: `guessed = correct ⊎ missed`.
///
/// Every guessed letter is either a hit or a miss, never both, and no
/// letter appears in either set without having been guessed. Misses hold
/// no duplicates.
pub struct PartitionInvariant;

impl Invariant<RoundInProgress> for PartitionInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        let player = round.player();
        let missed: BTreeSet<_> = player.missed_letters().iter().copied().collect();

        if missed.len() != player.missed_letters().len() {
            return false;
        }

        if !player.correct_letters().is_disjoint(&missed) {
            return false;
        }

        let union: BTreeSet<_> = player.correct_letters().union(&missed).copied().collect();
        union == *player.guessed_letters()
    }

    fn description() -> &'static str {
        "Guessed letters are the disjoint union of correct and missed letters"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::{Letter, PlayerState, RoundResult, RoundSetup, SecretWord};

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    fn start(word: &str) -> RoundInProgress {
        RoundSetup::new(SecretWord::new(word).unwrap()).start(PlayerState::new("p"))
    }

    #[test]
    fn test_fresh_round_holds() {
        assert!(PartitionInvariant::holds(&start("cat")));
    }

    #[test]
    fn test_mixed_guesses_hold() {
        let guesses = [letter('c'), letter('z'), letter('a'), letter('q')];
        if let Ok(RoundResult::InProgress(round)) = start("cat").replay(&guesses) {
            assert!(PartitionInvariant::holds(&round));
        } else {
            panic!("Expected in-progress round");
        }
    }

    #[test]
    fn test_letter_in_both_sets_violates() {
        let mut round = start("cat");
        round.player.record_guess(letter('a'), true);
        round.player.missed.push(letter('a'));
        assert!(!PartitionInvariant::holds(&round));
    }

    #[test]
    fn test_unguessed_hit_violates() {
        let mut round = start("cat");
        round.player.correct.insert(letter('t'));
        assert!(!PartitionInvariant::holds(&round));
    }
}
