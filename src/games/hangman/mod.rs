//! Hangman: rounds, players, rules and the word pool.

mod contracts;
mod guess;
mod invariants;
mod phases;
mod player;
mod pool;
mod rules;
mod types;
mod typestate;

pub use contracts::{Contract, GuessContract, LegalGuess, NotYetGuessed};
pub use guess::{GuessError, Letter};
pub use invariants::{
    HangmanInvariants, Invariant, InvariantSet, InvariantViolation, MissBoundInvariant,
    PartitionInvariant, SecretConsistentInvariant,
};
pub use phases::Outcome;
pub use player::PlayerState;
pub use pool::{PoolError, WordPool};
pub use rules::{MAX_MISSES, is_hanged, is_solved};
pub use types::{BoardView, RoundStatus, SecretWord, WordError};
pub use typestate::{RejectedGuess, RoundFinished, RoundInProgress, RoundResult, RoundSetup};
