//! Loss detection for hangman.

/// Misses allowed before the round is lost.
///
/// One less than the number of gallows stages: stage 0 is the empty
/// gallows, stage 6 the complete figure.
pub const MAX_MISSES: usize = 6;

/// Checks whether the miss limit has been reached.
pub fn is_hanged(miss_count: usize) -> bool {
    miss_count >= MAX_MISSES
}
