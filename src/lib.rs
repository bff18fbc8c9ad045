//! Strictly Hangman library - type-safe multiplayer hangman
//!
//! Players take turns guessing letters of words drawn from a topic word
//! list. Each finished word is followed by its dictionary definition.
//!
//! # Architecture
//!
//! - **Games**: Typestate hangman rounds with contracts and invariants
//! - **Sources**: HTTP word lists and dictionary lookups
//! - **Players**: Console, scripted and automatic guessers
//! - **Controller**: Rounds × players orchestration and scoring
//! - **Render**: Console output of board, gallows and results
//!
//! # Example
//!
//! ```no_run
//! use strictly_hangman::{
//!     DictionaryClient, FrequencyGuesser, GameController, HangmanConfig, RecordingRenderer,
//!     WordPool, numbered_players,
//! };
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = HangmanConfig::default();
//! let pool = WordPool::new(["guitar", "violin", "cello", "drum"]);
//! let controller = GameController::new(
//!     numbered_players(2),
//!     pool,
//!     2,
//!     Box::new(FrequencyGuesser::new("bot")),
//!     Box::new(DictionaryClient::from_config(&config)?),
//!     Box::new(RecordingRenderer::new()),
//! )?;
//! let summary = controller.with_seed(7).run().await?;
//! println!("{} rounds won", summary.total_score());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod games;
pub mod players;
pub mod render;
pub mod setup;
pub mod sources;

// Crate-level exports - Configuration
pub use config::{ConfigError, HangmanConfig};

// Crate-level exports - Match orchestration
pub use controller::{
    DefinitionStatus, GameController, MatchError, MatchEvent, MatchSummary, RoundRecord, Standing,
};

// Crate-level exports - Game types (hangman)
pub use games::hangman::{
    BoardView, GuessError, Letter, MAX_MISSES, Outcome, PlayerState, PoolError, RejectedGuess,
    RoundFinished, RoundInProgress, RoundResult, RoundSetup, RoundStatus, SecretWord, WordError,
    WordPool,
};

// Crate-level exports - Players
pub use players::{Console, FrequencyGuesser, Guesser, InputError, Prompt, ScriptedInput};

// Crate-level exports - Rendering
pub use render::{ConsoleRenderer, GallowsStage, RecordingRenderer, Renderer};

// Crate-level exports - Setup
pub use setup::{BANNER, SetupError, choose_topic, numbered_players, parse_count, resolve_count};

// Crate-level exports - Word and definition sources
pub use sources::{
    DatamuseClient, Definition, DefinitionLookup, DictionaryClient, Meaning, SourceError,
    WordSource,
};
