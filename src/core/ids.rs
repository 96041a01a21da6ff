//! Card identities and symbols.
//!
//! ## ID Layout
//!
//! Ids are allocated sequentially when a deck is built, two per symbol in
//! alphabet order, *before* the deck is shuffled:
//!
//! - symbol 0: ids `0, 1`
//! - symbol 1: ids `2, 3`
//! - ...
//!
//! Ids are stable for the whole session; only positions move.
//!
//! ```
//! use memory_match::core::{CardId, Symbol};
//!
//! let card = CardId::new(3);
//! assert_eq!(card.raw(), 3);
//! assert_eq!(format!("{}", card), "Card(3)");
//!
//! let symbol = Symbol::new("🎲");
//! assert_eq!(symbol.as_str(), "🎲");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier of a card within one session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// One glyph of the card alphabet.
///
/// The engine only compares symbols for equality; what they look like is
/// up to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol from any string-like value.
    pub fn new(glyph: impl Into<String>) -> Self {
        Self(glyph.into())
    }

    /// Borrow the glyph.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(glyph: &str) -> Self {
        Self::new(glyph)
    }
}

impl From<String> for Symbol {
    fn from(glyph: String) -> Self {
        Self(glyph)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
