//! Game event types.
//!
//! Events describe what happened, never how to present it. A host turns
//! `MatchFound` into a toast, a sound, or nothing at all.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, Symbol};

/// Something observable that happened during a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A fresh deck was dealt.
    GameStarted { generation: u64, card_count: usize },

    /// A card was turned face-up by the player.
    CardFlipped { card: CardId },

    /// A pair resolved as a match.
    MatchFound {
        first: CardId,
        second: CardId,
        symbol: Symbol,
    },

    /// A pair resolved as a mismatch and was turned back over.
    Mismatch { first: CardId, second: CardId },

    /// Every pair has been found.
    GameComplete { moves: u32, elapsed_seconds: u32 },
}

impl GameEvent {
    /// Does this event end the session?
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::GameComplete { .. })
    }
}
