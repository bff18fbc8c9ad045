//! Game rules for hangman.
//!
//! Pure functions deciding when a round is over. Rules are kept apart from
//! player bookkeeping so contracts and invariants can reuse them.

pub mod loss;
pub mod win;

pub use loss::{MAX_MISSES, is_hanged};
pub use win::is_solved;
