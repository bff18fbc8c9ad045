//! Miss bound invariant: a round in progress has misses left.

use super::super::RoundInProgress;
use super::super::rules::MAX_MISSES;
use super::Invariant;

/// Invariant: an unfinished round has fewer than `MAX_MISSES` misses.
///
/// The guess that makes the sixth miss ends the round, so a seventh miss
/// can never be recorded.
pub struct MissBoundInvariant;

impl Invariant<RoundInProgress> for MissBoundInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        round.miss_count() < MAX_MISSES
    }

    fn description() -> &'static str {
        "A round in progress has fewer than six misses"
    }
}
