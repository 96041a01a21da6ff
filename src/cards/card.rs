//! Card state during a session.
//!
//! A card is in exactly one of three visual states:
//!
//! | `is_flipped` | `is_matched` | meaning                         |
//! |--------------|--------------|---------------------------------|
//! | false        | false        | face-down, selectable           |
//! | true         | false        | face-up, awaiting resolution    |
//! | false        | true         | permanently revealed            |
//!
//! The engine never produces `is_flipped && is_matched`.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, Symbol};

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Session-stable identity.
    pub id: CardId,

    /// The glyph this card shows when face-up.
    pub symbol: Symbol,

    /// Face-up and waiting for its pair to resolve.
    pub is_flipped: bool,

    /// Permanently resolved as part of a matched pair.
    pub is_matched: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            is_flipped: false,
            is_matched: false,
        }
    }

    /// Should a view render this card's symbol?
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.is_flipped || self.is_matched
    }

    /// Can the player select this card?
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.is_flipped && !self.is_matched
    }

    /// Turn face-up pending resolution.
    pub(crate) fn flip_up(&mut self) {
        self.is_flipped = true;
    }

    /// Turn face-down after a mismatch.
    pub(crate) fn flip_down(&mut self) {
        self.is_flipped = false;
    }

    /// Lock in as part of a matched pair.
    pub(crate) fn mark_matched(&mut self) {
        self.is_flipped = false;
        self.is_matched = true;
    }
}
