//! Input replayed from a fixed list of lines.

use super::{Guesser, InputError, Prompt};
use crate::games::hangman::BoardView;
use std::collections::VecDeque;
use tracing::debug;

/// Replays prepared answers in order; fails once they run out.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    pauses: usize,
    notices: Vec<String>,
}

impl ScriptedInput {
    /// Creates a script from lines of input.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            pauses: 0,
            notices: Vec::new(),
        }
    }

    /// Lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }

    /// Number of between-turn pauses acknowledged.
    pub fn pauses(&self) -> usize {
        self.pauses
    }

    /// Messages shown through [`Prompt::notify`].
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    fn next_line(&mut self) -> Result<String, InputError> {
        self.lines
            .pop_front()
            .ok_or_else(|| InputError::new("Script exhausted"))
    }
}

#[async_trait::async_trait]
impl Prompt for ScriptedInput {
    async fn ask(&mut self, prompt: &str) -> Result<String, InputError> {
        let line = self.next_line()?;
        debug!(prompt, %line, "Scripted answer");
        Ok(line)
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

#[async_trait::async_trait]
impl Guesser for ScriptedInput {
    async fn next_guess(&mut self, _view: &BoardView) -> Result<String, InputError> {
        self.next_line()
    }

    async fn pause(&mut self, _message: &str) -> Result<(), InputError> {
        self.pauses += 1;
        Ok(())
    }

    fn name(&self) -> &str {
        "script"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lines_replayed_in_order_then_exhausted() {
        let mut script = ScriptedInput::new(["3", "music"]);
        assert_eq!(script.ask("rounds?").await.unwrap(), "3");
        assert_eq!(script.ask("topic?").await.unwrap(), "music");
        assert_eq!(script.remaining(), 0);

        let err = script.ask("again?").await.unwrap_err();
        assert_eq!(err.message, "Script exhausted");
    }

    #[tokio::test]
    async fn test_pauses_and_notices_are_counted() {
        let mut script = ScriptedInput::default();
        script.pause("next").await.unwrap();
        script.notify("No word list matching category: knitting");
        assert_eq!(script.pauses(), 1);
        assert_eq!(script.notices().len(), 1);
    }
}
