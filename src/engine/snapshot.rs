//! Read-only projection of a session for views.

use im::Vector;
use serde::Serialize;

use super::state::{Selection, SessionStatus};
use crate::cards::Card;
use crate::core::CardId;

/// Everything a board renderer or stats panel needs, detached from the
/// engine. Cloning the card list is O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Cards in board order.
    pub cards: Vector<Card>,
    /// Face-up cards awaiting resolution.
    pub selection: Selection,
    pub moves: u32,
    pub elapsed_seconds: u32,
    pub status: SessionStatus,
    /// Session generation; 0 before the first game.
    pub generation: u64,
}

impl GameSnapshot {
    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Number of matched cards.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Deck;
    use crate::core::Symbol;

    #[test]
    fn test_matched_count() {
        let mut deck = Deck::build(&[Symbol::new("A"), Symbol::new("B")]);
        let empty = GameSnapshot::default();
        assert_eq!(empty.matched_count(), 0);

        for id in [CardId::new(2), CardId::new(3)] {
            deck.get_mut(id).unwrap().mark_matched();
        }
        let snapshot = GameSnapshot {
            cards: deck.cards(),
            ..GameSnapshot::default()
        };

        assert_eq!(snapshot.matched_count(), 2);
        assert!(snapshot.card(CardId::new(3)).unwrap().is_matched);
        assert!(!snapshot.card(CardId::new(0)).unwrap().is_matched);
        assert!(snapshot.card(CardId::new(9)).is_none());
    }
}
