//! Card values.
//!
//! A `Card` is created once when the card data is loaded and never changes
//! afterwards. The caller only moves cards between the deck and the
//! history; it never looks inside the asset reference.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within a card set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
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

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Opaque handle to a card's artwork.
///
/// Could be a file path, a URL or a sprite key; only the rendering layer
/// interprets it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(pub String);

impl AssetRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetRef {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AssetRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A single card.
///
/// ## Example
///
/// ```
/// use loteria_caller::cards::{Card, CardId};
///
/// let card = Card::new(CardId::new(1), "El Gallo", "cards/01.png");
/// assert_eq!(card.name, "El Gallo");
/// assert_eq!(card.asset.as_str(), "cards/01.png");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier within the card set.
    pub id: CardId,

    /// Name shown to players.
    pub name: String,

    /// Artwork reference.
    pub asset: AssetRef,
}

impl Card {
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, asset: impl Into<AssetRef>) -> Self {
        Self {
            id,
            name: name.into(),
            asset: asset.into(),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.id.raw(), self.name)
    }
}
