//! The shuffled pool of cards not yet called.

use im::Vector;

use crate::cards::{Card, CardSet};
use crate::core::rng::GameRng;

/// Ordered, shuffled cards waiting to be called.
///
/// Built fresh for every game and only ever drained from the front.
/// Decks are never reshuffled in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Copy `set` into a new deck in uniformly random order.
    #[must_use]
    pub fn shuffled(set: &CardSet, rng: &mut GameRng) -> Self {
        let mut cards = set.as_slice().to_vec();
        rng.shuffle(&mut cards);
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Remove and return the front card. `None` once the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Peek at the next card without drawing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
