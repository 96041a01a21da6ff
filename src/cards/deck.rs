//! The deck: an ordered board of paired cards.
//!
//! Uses an `im::Vector` so read-only snapshots handed to views are O(1)
//! clones, plus an id index for constant-time lookup by `CardId`.
//!
//! ```
//! use memory_match::cards::Deck;
//! use memory_match::core::{GameRng, Symbol};
//!
//! let symbols = [Symbol::new("A"), Symbol::new("B")];
//! let mut rng = GameRng::new(7);
//! let deck = Deck::shuffled(&symbols, &mut rng);
//!
//! assert_eq!(deck.len(), 4);
//! assert_eq!(deck.pairs_remaining(), 2);
//! assert!(!deck.all_matched());
//! ```

use im::Vector;
use rustc_hash::FxHashMap;

use super::card::Card;
use crate::core::{CardId, GameRng, Symbol, MAX_SYMBOLS};

/// Ordered cards plus a position index.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    cards: Vector<Card>,
    positions: FxHashMap<CardId, usize>,
}

impl Deck {
    /// Build an unshuffled deck: two cards per symbol, ids assigned
    /// sequentially in alphabet order.
    ///
    /// Symbols past [`MAX_SYMBOLS`] are left out. A validated
    /// [`GameConfig`](crate::GameConfig) never has that many.
    #[must_use]
    pub fn build(symbols: &[Symbol]) -> Self {
        let cards: Vec<Card> = symbols
            .iter()
            .take(MAX_SYMBOLS)
            .zip(0u32..)
            .flat_map(|(symbol, pair)| {
                let first = CardId::new(pair * 2);
                let second = CardId::new(pair * 2 + 1);
                [Card::new(first, symbol.clone()), Card::new(second, symbol.clone())]
            })
            .collect();

        Self::from_cards(cards)
    }

    /// Build a deck and shuffle it into a uniformly random order.
    #[must_use]
    pub fn shuffled(symbols: &[Symbol], rng: &mut GameRng) -> Self {
        let mut cards: Vec<Card> = Self::build(symbols).cards.into_iter().collect();
        rng.shuffle(&mut cards);
        Self::from_cards(cards)
    }

    fn from_cards(cards: Vec<Card>) -> Self {
        let positions = cards
            .iter()
            .enumerate()
            .map(|(position, card)| (card.id, position))
            .collect();

        Self {
            cards: cards.into_iter().collect(),
            positions,
        }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the deck empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look up a card by id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.positions.get(&id).and_then(|&pos| self.cards.get(pos))
    }

    pub(crate) fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        let pos = *self.positions.get(&id)?;
        self.cards.get_mut(pos)
    }

    /// Board position of a card.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Cards in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// O(1) clone of the board for snapshots.
    #[must_use]
    pub fn cards(&self) -> Vector<Card> {
        self.cards.clone()
    }

    /// Number of cards locked in as matched.
    #[must_use]
    pub fn count_matched(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched).count()
    }

    /// Pairs not yet found.
    #[must_use]
    pub fn pairs_remaining(&self) -> usize {
        (self.len() - self.count_matched()) / 2
    }

    /// True once every card is matched. An empty deck is never complete.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|c| c.is_matched)
    }
}
