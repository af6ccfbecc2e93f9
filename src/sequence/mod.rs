//! Deck and call sequencing.
//!
//! - `Deck`: shuffled cards not yet called, drawn from the front
//! - `Sequencer`: current card plus the ordered call history

pub mod deck;
pub mod sequencer;

pub use deck::Deck;
pub use sequencer::Sequencer;
