//! Phase-specific typestate structs for a hangman round.
//!
//! A round moves `RoundSetup -> RoundInProgress -> RoundFinished`. Each
//! phase is its own type, so a finished round always carries an outcome
//! and can no longer accept guesses.

use super::contracts::{Contract, GuessContract};
use super::guess::{GuessError, Letter};
use super::phases::Outcome;
use super::player::PlayerState;
use super::rules;
use super::types::{BoardView, RoundStatus, SecretWord};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Round in setup phase: a secret word has been dealt.
#[derive(Debug, Clone)]
pub struct RoundSetup {
    secret: SecretWord,
}

impl RoundSetup {
    /// Deals a secret word for a new round.
    #[instrument]
    pub fn new(secret: SecretWord) -> Self {
        Self { secret }
    }

    /// Returns the secret word.
    pub fn secret(&self) -> &SecretWord {
        &self.secret
    }

    /// Seats a player and starts guessing.
    ///
    /// The player's round state is reset; the score carries over.
    #[instrument(skip(self, player), fields(player = %player.name()))]
    pub fn start(self, mut player: PlayerState) -> RoundInProgress {
        player.reset();
        info!(letters = self.secret.len(), "Round started");
        RoundInProgress {
            secret: self.secret,
            player,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Round awaiting a guess.
///
/// Invariants enforced by type and contract:
/// - at most five misses
/// - the word is not yet solved
/// - guessed letters split exactly into hits and misses
#[derive(Debug, Clone)]
pub struct RoundInProgress {
    pub(super) secret: SecretWord,
    pub(super) player: PlayerState,
}

impl RoundInProgress {
    /// Validates raw input as the next guess without changing any state.
    ///
    /// Rejects input that is not exactly one letter and letters already
    /// guessed this round.
    #[instrument(skip(self), fields(player = %self.player.name()))]
    pub fn check(&self, raw: &str) -> Result<Letter, GuessError> {
        let letter = Letter::parse(raw)?;
        GuessContract::pre(self, &letter)?;
        Ok(letter)
    }

    /// Applies a guess, consuming self and transitioning to the next state.
    ///
    /// A rejected guess hands the untouched round back inside the error.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self), fields(player = %self.player.name()))]
    pub fn guess(self, letter: Letter) -> Result<RoundResult, RejectedGuess> {
        if let Err(error) = GuessContract::pre(&self, &letter) {
            return Err(RejectedGuess::new(self, error));
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut round = self;
        let hit = round.secret.contains(letter);
        round.player.record_guess(letter, hit);
        debug!(%letter, hit, misses = round.player.miss_count(), "Guess recorded");

        if hit && rules::is_solved(&round.secret, round.player.correct_letters()) {
            return Ok(RoundResult::Finished(round.finish(Outcome::Won)));
        }

        if !hit && rules::is_hanged(round.player.miss_count()) {
            return Ok(RoundResult::Finished(round.finish(Outcome::Lost)));
        }

        #[cfg(debug_assertions)]
        if let Err(error) = GuessContract::post(&before, &round) {
            return Err(RejectedGuess::new(round, error));
        }

        Ok(RoundResult::InProgress(round))
    }

    /// Applies a sequence of guesses, stopping early if the round ends.
    #[instrument(skip(self))]
    pub fn replay(self, guesses: &[Letter]) -> Result<RoundResult, RejectedGuess> {
        let mut round = self;

        for &letter in guesses {
            match round.guess(letter)? {
                RoundResult::InProgress(r) => round = r,
                RoundResult::Finished(f) => return Ok(RoundResult::Finished(f)),
            }
        }

        Ok(RoundResult::InProgress(round))
    }

    /// Returns the secret word.
    pub fn secret(&self) -> &SecretWord {
        &self.secret
    }

    /// Returns the seated player.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Misses so far this round.
    pub fn miss_count(&self) -> usize {
        self.player.miss_count()
    }

    /// Misses left before the round is lost.
    pub fn misses_remaining(&self) -> usize {
        rules::MAX_MISSES.saturating_sub(self.miss_count())
    }

    /// Always `AwaitingGuess`.
    pub fn status(&self) -> RoundStatus {
        RoundStatus::AwaitingGuess
    }

    /// Snapshot for renderers and guessers.
    pub fn view(&self) -> BoardView {
        board_view(&self.secret, &self.player, self.status())
    }

    fn finish(self, outcome: Outcome) -> RoundFinished {
        info!(
            player = %self.player.name(),
            %outcome,
            misses = self.player.miss_count(),
            "Round finished"
        );
        RoundFinished {
            secret: self.secret,
            player: self.player,
            outcome,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Round finished: the outcome is always present.
#[derive(Debug, Clone)]
pub struct RoundFinished {
    secret: SecretWord,
    player: PlayerState,
    outcome: Outcome,
}

impl RoundFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the secret word.
    pub fn secret(&self) -> &SecretWord {
        &self.secret
    }

    /// Returns the player as they left the round.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Misses made during the round.
    pub fn miss_count(&self) -> usize {
        self.player.miss_count()
    }

    /// `Won` or `Lost`.
    pub fn status(&self) -> RoundStatus {
        self.outcome.into()
    }

    /// Final snapshot of the board.
    pub fn view(&self) -> BoardView {
        board_view(&self.secret, &self.player, self.status())
    }

    /// Releases the player back to the match.
    pub fn into_player(self) -> PlayerState {
        self.player
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Types
// ─────────────────────────────────────────────────────────────

/// Result of applying a guess.
#[derive(Debug)]
pub enum RoundResult {
    /// Round continues.
    InProgress(RoundInProgress),
    /// Round finished.
    Finished(RoundFinished),
}

/// A guess the round refused, with the round handed back unchanged.
#[derive(Debug, derive_more::Display)]
#[display("{}", error)]
pub struct RejectedGuess {
    round: RoundInProgress,
    error: GuessError,
}

impl RejectedGuess {
    fn new(round: RoundInProgress, error: GuessError) -> Self {
        Self { round, error }
    }

    /// Why the guess was refused.
    pub fn error(&self) -> &GuessError {
        &self.error
    }

    /// Splits into the round and the error.
    pub fn into_parts(self) -> (RoundInProgress, GuessError) {
        (self.round, self.error)
    }
}

impl std::error::Error for RejectedGuess {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

fn board_view(secret: &SecretWord, player: &PlayerState, status: RoundStatus) -> BoardView {
    BoardView {
        player: player.name().to_string(),
        miss_count: player.miss_count(),
        masked: secret.mask(player.correct_letters()),
        missed: player.missed_letters().to_vec(),
        guessed: player.guessed_letters().iter().copied().collect(),
        status,
    }
}
