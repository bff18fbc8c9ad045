//! Secret consistency invariant: hits and misses agree with the word.

use super::super::RoundInProgress;
use super::super::rules::is_solved;
use super::Invariant;

/// Invariant: hits are in the secret word, misses are not, and an
/// unfinished round is not already solved.
pub struct SecretConsistentInvariant;

impl Invariant<RoundInProgress> for SecretConsistentInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        let secret = round.secret();
        let player = round.player();

        let hits_in_word = player.correct_letters().iter().all(|&l| secret.contains(l));
        let misses_outside = player.missed_letters().iter().all(|&l| !secret.contains(l));

        hits_in_word && misses_outside && !is_solved(secret, player.correct_letters())
    }

    fn description() -> &'static str {
        "Correct letters occur in the secret word and missed letters do not"
    }
}
