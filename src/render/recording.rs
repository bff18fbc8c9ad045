//! Renderer that keeps every event for later inspection.

use super::Renderer;
use crate::controller::MatchEvent;
use std::sync::{Arc, Mutex};

/// Records events into a shared log. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    events: Arc<Mutex<Vec<MatchEvent>>>,
}

impl RecordingRenderer {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every event recorded so far.
    pub fn events(&self) -> Vec<MatchEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, event: &MatchEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_log() {
        let recorder = RecordingRenderer::new();
        let mut sink = recorder.clone();
        sink.render(&MatchEvent::RoundStarted {
            round: 1,
            player: "Player 1".to_string(),
        });
        assert_eq!(recorder.events().len(), 1);
    }
}
