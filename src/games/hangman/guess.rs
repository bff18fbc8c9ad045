//! First-class guess type for hangman.
//!
//! A `Letter` is the only thing a player can submit. It can only be built
//! through validation, so every `Letter` held by the engine is a single
//! lowercase ASCII letter.

use serde::Serialize;
use tracing::instrument;

/// A validated, lowercase-normalized letter guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Letter(char);

impl Letter {
    /// Parses raw player input into a letter.
    ///
    /// Surrounding whitespace is ignored. The remainder must be exactly one
    /// alphabetic ASCII character; uppercase input is folded to lowercase.
    #[instrument]
    pub fn parse(raw: &str) -> Result<Self, GuessError> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => Err(GuessError::NotSingleLetter(trimmed.to_string())),
        }
    }

    /// Builds a letter from a single character.
    pub fn from_char(c: char) -> Result<Self, GuessError> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_lowercase()))
        } else {
            Err(GuessError::NotALetter(c))
        }
    }

    /// Returns the letter as a lowercase `char`.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error that can occur when validating or applying a guess.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GuessError {
    /// Input was empty or longer than one character.
    #[display("Please enter a single letter (got {:?})", _0)]
    NotSingleLetter(String),

    /// Input was one character but not an alphabetic letter.
    #[display("Please enter a LETTER (got {:?})", _0)]
    NotALetter(char),

    /// The letter was already guessed this round.
    #[display("You have already guessed '{}'. Choose again", _0)]
    AlreadyGuessed(Letter),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl GuessError {
    /// Returns true for errors caused by player input, which are answered
    /// with a re-prompt.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GuessError::InvariantViolation(_))
    }
}

impl std::error::Error for GuessError {}
