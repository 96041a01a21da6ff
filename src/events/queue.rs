//! FIFO buffer of fired events.

use std::collections::VecDeque;

use super::event::GameEvent;

/// Events waiting for the host to collect them, oldest first.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    pending: VecDeque<GameEvent>,
}

impl EventQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire an event.
    pub fn push(&mut self, event: GameEvent) {
        self.pending.push_back(event);
    }

    /// Take every pending event in firing order.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        self.pending.drain(..).collect()
    }

    /// Look at pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.pending.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
