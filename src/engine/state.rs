//! Session state: the deck, the pending selection, and the counters.
//!
//! A `Session` is created whole by `MemoryGame::initialize_game` and
//! replaced whole by the next one. Nothing survives across sessions except
//! the generation counter owned by the game.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Deck;
use crate::core::CardId;

/// Where a game is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    /// No game has been dealt yet.
    #[default]
    NotStarted,
    /// Cards remain to be matched.
    Active,
    /// Every card is matched. Only a new game leaves this state.
    Complete,
}

impl SessionStatus {
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, SessionStatus::Active)
    }
}

/// Cards currently face-up and awaiting resolution, in selection order.
///
/// Holds at most two ids.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection(SmallVec<[CardId; 2]>);

impl Selection {
    /// Maximum number of pending cards.
    pub const CAPACITY: usize = 2;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Two cards pending: further selections are blocked.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.0.len() >= Self::CAPACITY
    }

    #[must_use]
    pub fn ids(&self) -> &[CardId] {
        &self.0
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.0.contains(&id)
    }

    /// The completed pair, if two cards are pending.
    #[must_use]
    pub fn pair(&self) -> Option<(CardId, CardId)> {
        match self.0.as_slice() {
            [first, second] => Some((*first, *second)),
            _ => None,
        }
    }

    /// Add a card. Returns false when already full.
    pub(crate) fn push(&mut self, id: CardId) -> bool {
        if self.is_full() {
            return false;
        }
        self.0.push(id);
        true
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

/// One playthrough.
#[derive(Clone, Debug)]
pub(crate) struct Session {
    pub generation: u64,
    pub deck: Deck,
    pub selection: Selection,
    pub moves: u32,
    pub elapsed_seconds: u32,
    pub status: SessionStatus,
}

impl Session {
    /// Fresh session over a dealt deck.
    pub fn new(generation: u64, deck: Deck) -> Self {
        Self {
            generation,
            deck,
            selection: Selection::new(),
            moves: 0,
            elapsed_seconds: 0,
            status: SessionStatus::Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_capacity() {
        let mut selection = Selection::new();
        assert!(selection.push(CardId::new(4)));
        assert_eq!(selection.pair(), None);
        assert!(selection.push(CardId::new(7)));

        assert!(selection.is_full());
        assert!(!selection.push(CardId::new(9)));
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.pair(), Some((CardId::new(4), CardId::new(7))));
        assert!(selection.contains(CardId::new(7)));

        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_default_status() {
        assert_eq!(SessionStatus::default(), SessionStatus::NotStarted);
        assert!(SessionStatus::Active.is_active());
        assert!(!SessionStatus::Complete.is_active());
    }
}
