//! Score line formatting.
//!
//! ```
//! use memory_match::stats::{format_clock, GameStats};
//!
//! assert_eq!(format_clock(75), "01:15");
//!
//! let stats = GameStats { moves: 12, elapsed_seconds: 75 };
//! assert_eq!(stats.to_string(), "01:15 | 12 moves");
//! ```

use serde::{Deserialize, Serialize};

use crate::engine::{GameSnapshot, MemoryGame};

/// Moves and time for one session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameStats {
    pub moves: u32,
    pub elapsed_seconds: u32,
}

impl GameStats {
    /// Elapsed time as `MM:SS`.
    #[must_use]
    pub fn clock(&self) -> String {
        format_clock(self.elapsed_seconds)
    }
}

impl From<&MemoryGame> for GameStats {
    fn from(game: &MemoryGame) -> Self {
        Self {
            moves: game.moves(),
            elapsed_seconds: game.elapsed_seconds(),
        }
    }
}

impl From<&GameSnapshot> for GameStats {
    fn from(snapshot: &GameSnapshot) -> Self {
        Self {
            moves: snapshot.moves,
            elapsed_seconds: snapshot.elapsed_seconds,
        }
    }
}

impl std::fmt::Display for GameStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {} moves", self.clock(), self.moves)
    }
}

/// Zero-padded `MM:SS`. Minutes are not wrapped into hours.
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
