//! Contract-based validation for hangman guesses.
//!
//! Contracts define correctness through preconditions and postconditions,
//! in the Hoare style `{P} guess {Q}`.

use super::guess::{GuessError, Letter};
use super::invariants::{HangmanInvariants, InvariantSet};
use super::typestate::RoundInProgress;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GuessError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GuessError>;
}

// ─────────────────────────────────────────────────────────────
//  Guess Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the letter has not been guessed yet this round.
pub struct NotYetGuessed;

impl NotYetGuessed {
    /// Rejects letters already in the player's guessed set.
    #[instrument(skip(round))]
    pub fn check(letter: &Letter, round: &RoundInProgress) -> Result<(), GuessError> {
        if round.player().has_guessed(*letter) {
            Err(GuessError::AlreadyGuessed(*letter))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition for a guess.
///
/// Length and alphabet checks are carried by the `Letter` type itself, so
/// only the round-dependent rule remains.
pub struct LegalGuess;

impl LegalGuess {
    /// Validates all preconditions for a guess.
    #[instrument(skip(round))]
    pub fn check(letter: &Letter, round: &RoundInProgress) -> Result<(), GuessError> {
        NotYetGuessed::check(letter, round)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Guess Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for guess actions.
///
/// Preconditions:
/// - Letter not yet guessed this round
///
/// Postconditions:
/// - Exactly one new letter was recorded
/// - Score is untouched by a guess
/// - All round invariants hold
pub struct GuessContract;

impl Contract<RoundInProgress, Letter> for GuessContract {
    fn pre(round: &RoundInProgress, letter: &Letter) -> Result<(), GuessError> {
        LegalGuess::check(letter, round)
    }

    fn post(before: &RoundInProgress, after: &RoundInProgress) -> Result<(), GuessError> {
        let (b, a) = (before.player(), after.player());

        if a.guessed_letters().len() != b.guessed_letters().len() + 1
            || !b.guessed_letters().is_subset(a.guessed_letters())
        {
            warn!(
                before = b.guessed_letters().len(),
                after = a.guessed_letters().len(),
                "Guess did not add exactly one letter"
            );
            return Err(GuessError::InvariantViolation(
                "Postcondition failed: a guess must add exactly one letter".to_string(),
            ));
        }

        if a.score() != b.score() {
            warn!(before = b.score(), after = a.score(), "Guess changed the score");
            return Err(GuessError::InvariantViolation(
                "Postcondition failed: a guess must not change the score".to_string(),
            ));
        }

        HangmanInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GuessError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
