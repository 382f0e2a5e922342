//! Synchronous event observers.
//!
//! `Game::play_observed` hands each event of the call to an observer before
//! returning. Observers are owned by the caller and see events in order.

use super::event::GameEvent;

/// Receives game events as they are produced.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

/// Closures are observers.
impl<F: FnMut(&GameEvent)> GameObserver for F {
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Records every event it sees.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Number of wars declared so far.
    #[must_use]
    pub fn war_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::WarStarted { .. }))
            .count()
    }

    /// Number of hands resolved so far.
    #[must_use]
    pub fn hand_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::HandComplete { .. }))
            .count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl GameObserver for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}
