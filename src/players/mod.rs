//! Input collaborators: where guesses and setup answers come from.

mod console;
mod frequency;
mod scripted;

pub use console::Console;
pub use frequency::FrequencyGuesser;
pub use scripted::ScriptedInput;

use crate::games::hangman::BoardView;
use derive_more::{Display, Error};
use tracing::{error, instrument};

/// Answers free-form setup questions (round count, topic, ...).
#[async_trait::async_trait]
pub trait Prompt: Send {
    /// Shows `prompt` and returns the next line of input.
    async fn ask(&mut self, prompt: &str) -> Result<String, InputError>;

    /// Shows an informational message. Silent by default.
    fn notify(&mut self, _message: &str) {}
}

/// Supplies raw guesses during a round.
///
/// Raw input is validated by the round; invalid guesses are re-requested.
#[async_trait::async_trait]
pub trait Guesser: Send {
    /// Returns the next raw guess for the board shown.
    async fn next_guess(&mut self, view: &BoardView) -> Result<String, InputError>;

    /// Waits for acknowledgement between turns.
    async fn pause(&mut self, _message: &str) -> Result<(), InputError> {
        Ok(())
    }

    /// Display name of the input source.
    fn name(&self) -> &str;
}

/// Input stream failure (closed stdin, exhausted script).
#[derive(Debug, Clone, Display, Error)]
#[display("Input error: {} at {}:{}", message, file, line)]
pub struct InputError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InputError {
    /// Creates a new input error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        let message = message.into();
        error!(error_message = %message, "Input error created");
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for InputError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}
