//! Card system: cards and the deck that holds them.
//!
//! ## Key Types
//!
//! - `Card`: One card's identity, symbol and flip/match flags
//! - `Deck`: Ordered board, two cards per symbol, shuffled per game

pub mod card;
pub mod deck;

pub use card::Card;
pub use deck::Deck;
