//! Validated card sets.
//!
//! A `CardSet` is the full, deduplicated list of cards a game is played
//! with. Every deck is a permutation of exactly one card set.

use rustc_hash::FxHashSet;

use super::card::{Card, CardId};
use crate::core::error::CardSetError;

/// A non-empty collection of cards with unique ids and names.
///
/// ## Example
///
/// ```
/// use loteria_caller::cards::{Card, CardId, CardSet};
///
/// let set = CardSet::new(vec![
///     Card::new(CardId::new(1), "El Gallo", "cards/01.png"),
///     Card::new(CardId::new(2), "El Diablito", "cards/02.png"),
/// ])
/// .unwrap();
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.get(CardId::new(2)).unwrap().name, "El Diablito");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardSet {
    cards: Vec<Card>,
}

impl CardSet {
    /// Validate and wrap a list of cards.
    pub fn new(cards: Vec<Card>) -> Result<Self, CardSetError> {
        if cards.is_empty() {
            return Err(CardSetError::Empty);
        }

        let mut ids = FxHashSet::default();
        let mut names = FxHashSet::default();
        for card in &cards {
            if !ids.insert(card.id) {
                return Err(CardSetError::DuplicateId(card.id));
            }
            if !names.insert(card.name.as_str()) {
                return Err(CardSetError::DuplicateName(card.name.clone()));
            }
        }

        Ok(Self { cards })
    }

    /// Number of cards in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the set has no cards. Always false once constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card by id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.get(id).is_some()
    }
}

impl<'a> IntoIterator for &'a CardSet {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
