//! Plain-text terminal renderer.

use super::{GallowsStage, Renderer};
use crate::controller::{DefinitionStatus, MatchEvent};
use crate::games::hangman::{BoardView, Outcome};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use std::io::{Stdout, Write};
use tracing::warn;

/// Draws the gallows, missed letters and blanks as text.
pub struct ConsoleRenderer<W = Stdout> {
    out: W,
    clear_screen: bool,
    round: u32,
}

impl ConsoleRenderer<Stdout> {
    /// Renders to stdout.
    pub fn stdout(clear_screen: bool) -> Self {
        Self::new(std::io::stdout(), clear_screen)
    }
}

impl<W: Write> ConsoleRenderer<W> {
    /// Renders to any writer. `clear_screen` wipes the terminal before each
    /// board.
    pub fn new(out: W, clear_screen: bool) -> Self {
        Self {
            out,
            clear_screen,
            round: 0,
        }
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, event: &MatchEvent) -> std::io::Result<()> {
        match event {
            MatchEvent::MatchStarted {
                players,
                rounds,
                words,
            } => {
                writeln!(
                    self.out,
                    " {} player(s), {} round(s), {} words in play",
                    players.len(),
                    rounds,
                    words
                )?;
            }
            MatchEvent::RoundStarted { round, player } => {
                self.round = *round;
                writeln!(self.out, " ROUND {} - {}", round, player)?;
            }
            MatchEvent::BoardChanged(view) => self.draw_board(view)?,
            MatchEvent::GuessRejected { error, .. } => {
                writeln!(self.out, " {}.", error)?;
            }
            MatchEvent::RoundEnded { record, definition } => {
                match record.outcome {
                    Outcome::Won => {
                        writeln!(
                            self.out,
                            " WON: {} has won round {}",
                            record.player, record.round
                        )?;
                    }
                    Outcome::Lost => {
                        writeln!(self.out, " You have run out of guesses!")?;
                        writeln!(self.out, " After {} missed guesses", record.misses)?;
                    }
                }
                writeln!(self.out, " SECRET WORD : {}", record.secret)?;
                match definition {
                    DefinitionStatus::Found(definition) => {
                        writeln!(self.out, " DEFINITION")?;
                        write!(self.out, "{}", definition)?;
                    }
                    DefinitionStatus::Unavailable => {
                        writeln!(self.out, " Definition unavailable")?;
                    }
                }
                writeln!(self.out, "{}", "*".repeat(20))?;
            }
            MatchEvent::MatchFinished(summary) => {
                writeln!(self.out, "Results:")?;
                for standing in summary.standings() {
                    writeln!(self.out, "{} = {}", standing.name, standing.score)?;
                }
                let leaders = summary.leaders();
                match leaders.as_slice() {
                    [leader] if leader.score > 0 => {
                        writeln!(self.out, "Winner: {}", leader.name)?;
                    }
                    [_, _, ..] if summary.total_score() > 0 => {
                        let names: Vec<_> = leaders.iter().map(|s| s.name.as_str()).collect();
                        writeln!(self.out, "Tie between {}", names.join(", "))?;
                    }
                    _ => {}
                }
            }
        }
        self.out.flush()
    }

    fn draw_board(&mut self, view: &BoardView) -> std::io::Result<()> {
        if self.clear_screen {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
            writeln!(self.out, " ROUND {}", self.round)?;
        }
        writeln!(self.out, "{}'s Turn", view.player)?;
        write!(self.out, "{}", GallowsStage::from_misses(view.miss_count).art())?;

        let missed: Vec<String> = view.missed.iter().map(|l| l.to_string()).collect();
        writeln!(self.out, "Missed letters: {}", missed.join(" "))?;
        writeln!(self.out)?;

        let blanks: Vec<String> = view.masked.chars().map(String::from).collect();
        writeln!(self.out, "{}", blanks.join(" "))
    }
}

impl<W: Write + Send> Renderer for ConsoleRenderer<W> {
    fn render(&mut self, event: &MatchEvent) {
        if let Err(error) = self.draw(event) {
            warn!(%error, "Failed to render event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{MatchSummary, RoundRecord};
    use crate::games::hangman::{Letter, PlayerState, RoundStatus, SecretWord};

    fn render(events: &[MatchEvent]) -> String {
        let mut renderer = ConsoleRenderer::new(Vec::new(), false);
        for event in events {
            renderer.render(event);
        }
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_board_shows_gallows_misses_and_blanks() {
        let view = BoardView {
            player: "Player 1".to_string(),
            miss_count: 2,
            masked: "_a_".to_string(),
            missed: vec![Letter::from_char('x').unwrap(), Letter::from_char('q').unwrap()],
            guessed: Vec::new(),
            status: RoundStatus::AwaitingGuess,
        };
        let out = render(&[MatchEvent::BoardChanged(view)]);

        assert!(out.contains("Player 1's Turn"));
        assert!(out.contains(GallowsStage::Torso.art()));
        assert!(out.contains("Missed letters: x q"));
        assert!(out.contains("_ a _"));
    }

    #[test]
    fn test_lost_round_reports_secret_and_placeholder() {
        let record = RoundRecord::new(
            2,
            "Player 1".to_string(),
            SecretWord::new("cat").unwrap(),
            Outcome::Lost,
            6,
        );
        let out = render(&[MatchEvent::RoundEnded {
            record,
            definition: DefinitionStatus::Unavailable,
        }]);

        assert!(out.contains("After 6 missed guesses"));
        assert!(out.contains("SECRET WORD : cat"));
        assert!(out.contains("Definition unavailable"));
    }

    #[test]
    fn test_results_list_every_player() {
        let mut players = vec![PlayerState::new("Player 1"), PlayerState::new("Player 2")];
        players[1].award_win();
        let out = render(&[MatchEvent::MatchFinished(MatchSummary::new(&players, Vec::new()))]);

        assert!(out.contains("Results:"));
        assert!(out.contains("Player 2 = 1"));
        assert!(out.contains("Player 1 = 0"));
        assert!(out.contains("Winner: Player 2"));
    }
}
