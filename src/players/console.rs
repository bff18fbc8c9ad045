//! Human player reading from the terminal.

use super::{Guesser, InputError, Prompt};
use crate::games::hangman::BoardView;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};
use tracing::{debug, instrument};

/// Line-oriented stdin input for setup questions and guesses.
pub struct Console {
    input: BufReader<Stdin>,
}

impl Console {
    /// Creates a console reading from stdin.
    pub fn new() -> Self {
        Self {
            input: BufReader::new(tokio::io::stdin()),
        }
    }

    /// Reads one line. Only end of input is an error; bytes that are not
    /// UTF-8 are replaced and left for guess validation to reject.
    async fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        print!("{}", prompt);
        std::io::stdout().flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf).await? == 0 {
            return Err(InputError::new("Input closed"));
        }

        let line = decode_line(&buf);
        debug!(len = line.len(), "Read line");
        Ok(line)
    }
}

/// Decodes raw line bytes, dropping the line ending.
///
/// Invalid UTF-8 becomes U+FFFD, which is never a letter.
pub(super) fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Prompt for Console {
    #[instrument(skip(self))]
    async fn ask(&mut self, prompt: &str) -> Result<String, InputError> {
        self.read_line(prompt).await
    }

    fn notify(&mut self, message: &str) {
        println!(" {}", message);
    }
}

#[async_trait::async_trait]
impl Guesser for Console {
    #[instrument(skip(self, view), fields(player = %view.player))]
    async fn next_guess(&mut self, view: &BoardView) -> Result<String, InputError> {
        self.read_line(" Guess a letter: ").await
    }

    async fn pause(&mut self, message: &str) -> Result<(), InputError> {
        self.read_line(&format!("{} ", message)).await.map(|_| ())
    }

    fn name(&self) -> &str {
        "console"
    }
}
