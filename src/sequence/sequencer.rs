//! Current card and call history.

use im::Vector;

use super::deck::Deck;
use crate::cards::Card;

/// Tracks the card on display and every card called before it.
///
/// The sequencer does not own the deck. Its owner passes the deck in on
/// each advance, so `history.len() + deck.len()` stays equal to the size
/// of the card set for the whole game.
#[derive(Clone, Debug, Default)]
pub struct Sequencer {
    current: Option<Card>,
    history: Vector<Card>,
}

impl Sequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the next card.
    ///
    /// Returns the newly current card, or `None` when the deck is
    /// exhausted. Exhaustion leaves the current card and history as they
    /// were.
    pub fn advance(&mut self, deck: &mut Deck) -> Option<&Card> {
        let card = deck.draw()?;
        self.history.push_back(card.clone());
        self.current = Some(card);
        self.current.as_ref()
    }

    /// Forget the current card and the history.
    pub fn reset(&mut self) {
        self.current = None;
        self.history.clear();
    }

    #[must_use]
    pub fn current(&self) -> Option<&Card> {
        self.current.as_ref()
    }

    /// Called cards, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Card> {
        &self.history
    }

    /// Number of cards called so far.
    #[must_use]
    pub fn revealed(&self) -> usize {
        self.history.len()
    }
}
