//! Render sinks for match events.
//!
//! The controller never touches the terminal; it hands every state change
//! to a [`Renderer`].

mod console;
mod gallows;
mod recording;

pub use console::ConsoleRenderer;
pub use gallows::GallowsStage;
pub use recording::RecordingRenderer;

use crate::controller::MatchEvent;

/// Consumes match events and turns them into output.
pub trait Renderer: Send {
    /// Handles one event. Rendering failures are logged, never propagated.
    fn render(&mut self, event: &MatchEvent);
}
