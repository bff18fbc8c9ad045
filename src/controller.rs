//! Match orchestration across players and rounds.

use crate::config::ConfigError;
use crate::games::hangman::{
    BoardView, GuessError, Outcome, PlayerState, PoolError, RoundFinished, RoundInProgress,
    RoundResult, RoundSetup, SecretWord, WordPool,
};
use crate::players::{Guesser, InputError};
use crate::render::Renderer;
use crate::sources::{Definition, DefinitionLookup};
use derive_new::new;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Messages sent from the controller to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEvent {
    /// The match is about to deal its first word.
    MatchStarted {
        /// Player names in turn order.
        players: Vec<String>,
        /// Number of rounds.
        rounds: u32,
        /// Words available in the pool.
        words: usize,
    },
    /// A player's turn in a round began.
    RoundStarted {
        /// Round number, starting at 1.
        round: u32,
        /// Player whose turn it is.
        player: String,
    },
    /// The board changed (new round or accepted guess).
    BoardChanged(BoardView),
    /// A guess was refused; the player is asked again.
    GuessRejected {
        /// Player who made the guess.
        player: String,
        /// Why it was refused.
        error: GuessError,
    },
    /// A round ended.
    RoundEnded {
        /// What happened.
        record: RoundRecord,
        /// Meaning of the secret word, if the lookup worked.
        definition: DefinitionStatus,
    },
    /// All rounds are done.
    MatchFinished(MatchSummary),
}

/// Result of a definition lookup as shown to players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionStatus {
    /// The dictionary answered.
    Found(Definition),
    /// The lookup failed; a placeholder is shown instead.
    Unavailable,
}

/// One finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct RoundRecord {
    /// Round number, starting at 1.
    pub round: u32,
    /// Player who played it.
    pub player: String,
    /// The word they had to find.
    pub secret: SecretWord,
    /// Won or lost.
    pub outcome: Outcome,
    /// Misses made.
    pub misses: usize,
}

/// A player's final score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct Standing {
    /// Player name.
    pub name: String,
    /// Rounds won.
    pub score: u32,
}

/// Final ranking and round history of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    standings: Vec<Standing>,
    history: Vec<RoundRecord>,
}

impl MatchSummary {
    /// Ranks players by score, highest first. Ties keep turn order.
    #[instrument(skip_all, fields(players = players.len()))]
    pub fn new(players: &[PlayerState], history: Vec<RoundRecord>) -> Self {
        let mut standings: Vec<Standing> = players
            .iter()
            .map(|p| Standing::new(p.name().to_string(), p.score()))
            .collect();
        standings.sort_by(|a, b| b.score.cmp(&a.score));
        Self { standings, history }
    }

    /// Players ranked by score.
    pub fn standings(&self) -> &[Standing] {
        &self.standings
    }

    /// Every round in the order it was played.
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Everyone sharing the top score.
    pub fn leaders(&self) -> Vec<&Standing> {
        let top = self.standings.first().map(|s| s.score).unwrap_or_default();
        self.standings.iter().filter(|s| s.score == top).collect()
    }

    /// Sum of all scores; equals the number of rounds won.
    pub fn total_score(&self) -> u32 {
        self.standings.iter().map(|s| s.score).sum()
    }
}

/// Error that ends a match early.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum MatchError {
    /// The pool ran dry.
    #[display("Match aborted: no words left to deal")]
    Pool(PoolError),
    /// The round engine reported a broken invariant.
    #[display("Match aborted: round state is inconsistent")]
    Guess(GuessError),
    /// Input stopped.
    #[display("Match aborted: no more input")]
    Input(InputError),
}

/// Orchestrates a match: rounds × players, scores, summary.
pub struct GameController {
    players: Vec<PlayerState>,
    pool: WordPool,
    rounds: u32,
    guesser: Box<dyn Guesser>,
    dictionary: Box<dyn DefinitionLookup>,
    renderer: Box<dyn Renderer>,
    rng: StdRng,
    pause_between_turns: bool,
    history: Vec<RoundRecord>,
}

impl GameController {
    /// Creates a controller, failing fast on an unplayable setup.
    ///
    /// Needs at least one player, at least one round, and one pool word per
    /// round per player.
    #[instrument(skip_all, fields(players = players.len(), rounds = rounds, words = pool.len()))]
    pub fn new(
        players: Vec<PlayerState>,
        pool: WordPool,
        rounds: u32,
        guesser: Box<dyn Guesser>,
        dictionary: Box<dyn DefinitionLookup>,
        renderer: Box<dyn Renderer>,
    ) -> Result<Self, ConfigError> {
        if players.is_empty() {
            return Err(ConfigError::new("A match needs at least one player"));
        }
        if rounds == 0 {
            return Err(ConfigError::new("A match needs at least one round"));
        }
        let needed = (rounds as usize)
            .checked_mul(players.len())
            .ok_or_else(|| ConfigError::new("Too many rounds for this many players"))?;
        pool.ensure_capacity(needed)?;

        Ok(Self {
            players,
            pool,
            rounds,
            guesser,
            dictionary,
            renderer,
            rng: StdRng::from_os_rng(),
            pause_between_turns: false,
            history: Vec::new(),
        })
    }

    /// Uses the given RNG for word draws.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Seeds word draws for a reproducible match.
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(StdRng::seed_from_u64(seed))
    }

    /// Asks the guesser to acknowledge each hand-over between turns.
    pub fn with_pause_between_turns(mut self, pause: bool) -> Self {
        self.pause_between_turns = pause;
        self
    }

    /// Players in turn order.
    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    /// Words not yet dealt.
    pub fn pool(&self) -> &WordPool {
        &self.pool
    }

    /// Runs every round for every player and returns the summary.
    #[instrument(skip(self), fields(rounds = self.rounds, players = self.players.len()))]
    pub async fn run(mut self) -> Result<MatchSummary, MatchError> {
        info!(words = self.pool.len(), "Starting match");
        self.renderer.render(&MatchEvent::MatchStarted {
            players: self.players.iter().map(|p| p.name().to_string()).collect(),
            rounds: self.rounds,
            words: self.pool.len(),
        });

        let seats = self.players.len();
        for round in 1..=self.rounds {
            info!(round, "Round begins");
            for seat in 0..seats {
                self.play_turn(round, seat).await?;

                let last_turn = round == self.rounds && seat + 1 == seats;
                if self.pause_between_turns && !last_turn {
                    self.guesser
                        .pause("Next player's turn. Press Enter to continue...")
                        .await?;
                }
            }
        }

        let history = std::mem::take(&mut self.history);
        let summary = MatchSummary::new(&self.players, history);
        info!(total_score = summary.total_score(), "Match finished");
        self.renderer.render(&MatchEvent::MatchFinished(summary.clone()));
        Ok(summary)
    }

    /// Deals a word to one player, plays the round, and reports it.
    #[instrument(skip(self))]
    async fn play_turn(&mut self, round: u32, seat: usize) -> Result<(), MatchError> {
        let secret = self.pool.draw(&mut self.rng)?;
        debug!(remaining = self.pool.len(), "Word dealt");

        let player = std::mem::take(&mut self.players[seat]);
        self.renderer.render(&MatchEvent::RoundStarted {
            round,
            player: player.name().to_string(),
        });

        let finished = self.play_round(RoundSetup::new(secret).start(player)).await?;
        self.renderer.render(&MatchEvent::BoardChanged(finished.view()));

        let outcome = finished.outcome();
        let record = RoundRecord::new(
            round,
            finished.player().name().to_string(),
            finished.secret().clone(),
            outcome,
            finished.miss_count(),
        );

        let mut player = finished.into_player();
        if outcome.is_win() {
            player.award_win();
        }
        self.players[seat] = player;

        let definition = self.lookup(record.secret.as_str()).await;
        self.renderer.render(&MatchEvent::RoundEnded {
            record: record.clone(),
            definition,
        });
        self.history.push(record);
        Ok(())
    }

    /// Collects guesses until the round is won or lost.
    async fn play_round(&mut self, round: RoundInProgress) -> Result<RoundFinished, MatchError> {
        let mut round = round;

        loop {
            let view = round.view();
            self.renderer.render(&MatchEvent::BoardChanged(view.clone()));

            let letter = loop {
                let raw = self.guesser.next_guess(&view).await?;
                match round.check(&raw) {
                    Ok(letter) => break letter,
                    Err(error) => {
                        debug!(%error, "Guess rejected");
                        self.renderer.render(&MatchEvent::GuessRejected {
                            player: view.player.clone(),
                            error,
                        });
                    }
                }
            };

            round = match round.guess(letter) {
                Ok(RoundResult::InProgress(next)) => next,
                Ok(RoundResult::Finished(finished)) => return Ok(finished),
                Err(rejected) => {
                    let (round, error) = rejected.into_parts();
                    if !error.is_recoverable() {
                        return Err(error.into());
                    }
                    self.renderer.render(&MatchEvent::GuessRejected {
                        player: view.player.clone(),
                        error,
                    });
                    round
                }
            };
        }
    }

    /// Looks up a definition; failures become a placeholder.
    #[instrument(skip(self))]
    async fn lookup(&self, word: &str) -> DefinitionStatus {
        match self.dictionary.meaning(word).await {
            Ok(definition) => DefinitionStatus::Found(definition),
            Err(error) => {
                warn!(%error, "Definition unavailable");
                DefinitionStatus::Unavailable
            }
        }
    }
}
