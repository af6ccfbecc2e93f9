//! Card system: card values, validated sets and providers.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for a card within its set
//! - `Card`: Immutable card value (id, name, asset reference)
//! - `CardSet`: Non-empty, deduplicated list of cards
//! - `CardSetProvider`: Where card sets come from (`StandardDeck`, `JsonCardSet`)

pub mod card;
pub mod provider;
pub mod set;

pub use card::{AssetRef, Card, CardId};
pub use provider::{CardSetProvider, JsonCardSet, StandardDeck, STANDARD_CARD_NAMES};
pub use set::CardSet;
