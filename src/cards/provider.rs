//! Card-set providers.
//!
//! The controller never loads card data itself. Whatever owns it asks a
//! `CardSetProvider` for a `CardSet` before calling `new_game`, so load
//! failures surface before any game exists.

use std::fs;
use std::path::PathBuf;

use rustc_hash::FxHashSet;
use serde::Deserialize;
use tracing::debug;

use super::card::{Card, CardId};
use super::set::CardSet;
use crate::core::error::CardSetError;

const LOG_TARGET: &str = "loteria_caller::cards";

/// Source of the full card set for a game.
pub trait CardSetProvider {
    fn load(&self) -> Result<CardSet, CardSetError>;
}

/// Names of the traditional 54 Loteria cards, in numbered order.
pub const STANDARD_CARD_NAMES: [&str; 54] = [
    "El Gallo",
    "El Diablito",
    "La Dama",
    "El Catrín",
    "El Paraguas",
    "La Sirena",
    "La Escalera",
    "La Botella",
    "El Barril",
    "El Árbol",
    "El Melón",
    "El Valiente",
    "El Gorrito",
    "La Muerte",
    "La Pera",
    "La Bandera",
    "El Bandolón",
    "El Violoncello",
    "La Garza",
    "El Pájaro",
    "La Mano",
    "La Bota",
    "La Luna",
    "El Cotorro",
    "El Borracho",
    "El Negrito",
    "El Corazón",
    "La Sandía",
    "El Tambor",
    "El Camarón",
    "Las Jaras",
    "El Músico",
    "La Araña",
    "El Soldado",
    "La Estrella",
    "El Cazo",
    "El Mundo",
    "El Apache",
    "El Nopal",
    "El Alacrán",
    "La Rosa",
    "La Calavera",
    "La Campana",
    "El Cantarito",
    "El Venado",
    "El Sol",
    "La Corona",
    "La Chalupa",
    "El Pino",
    "El Pescado",
    "La Palma",
    "La Maceta",
    "El Arpa",
    "La Rana",
];

/// The built-in 54-card set.
///
/// Card `n` gets id `n` and the asset reference `"{prefix}/NN.png"`.
#[derive(Clone, Debug)]
pub struct StandardDeck {
    asset_prefix: String,
}

impl StandardDeck {
    pub fn new(asset_prefix: impl Into<String>) -> Self {
        Self {
            asset_prefix: asset_prefix.into(),
        }
    }
}

impl Default for StandardDeck {
    fn default() -> Self {
        Self::new("cards")
    }
}

impl CardSetProvider for StandardDeck {
    fn load(&self) -> Result<CardSet, CardSetError> {
        let prefix = self.asset_prefix.trim_end_matches('/');
        let cards = (1u32..)
            .zip(STANDARD_CARD_NAMES)
            .map(|(n, name)| Card::new(CardId::new(n), name, format!("{prefix}/{n:02}.png")))
            .collect();
        CardSet::new(cards)
    }
}

/// One entry of a JSON card list.
#[derive(Debug, Deserialize)]
struct CardRecord {
    id: Option<u32>,
    name: String,
    asset: String,
}

#[derive(Clone, Debug)]
enum JsonSource {
    Text(String),
    File(PathBuf),
}

/// Card set read from a JSON array.
///
/// ```json
/// [
///   { "id": 1, "name": "El Gallo", "asset": "cards/01.png" },
///   { "name": "El Diablito", "asset": "cards/02.png" }
/// ]
/// ```
///
/// Entries without an `id` are numbered in list order with the lowest
/// numbers (from 1) that no explicit `id` in the list claims.
#[derive(Clone, Debug)]
pub struct JsonCardSet {
    source: JsonSource,
}

impl JsonCardSet {
    /// Read the list from an in-memory string.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            source: JsonSource::Text(text.into()),
        }
    }

    /// Read the list from a file when `load` is called.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: JsonSource::File(path.into()),
        }
    }

    fn parse(text: &str) -> Result<CardSet, CardSetError> {
        let records: Vec<CardRecord> = serde_json::from_str(text)?;
        let claimed: FxHashSet<u32> = records.iter().filter_map(|r| r.id).collect();
        let mut free = (1u32..).filter(|n| !claimed.contains(n));
        let cards = records
            .into_iter()
            .map(|r| {
                let id = r.id.or_else(|| free.next()).unwrap_or(u32::MAX);
                Card::new(CardId::new(id), r.name, r.asset)
            })
            .collect();
        CardSet::new(cards)
    }
}

impl CardSetProvider for JsonCardSet {
    fn load(&self) -> Result<CardSet, CardSetError> {
        let set = match &self.source {
            JsonSource::Text(text) => Self::parse(text)?,
            JsonSource::File(path) => {
                let text = fs::read_to_string(path).map_err(|source| CardSetError::Io {
                    path: path.clone(),
                    source,
                })?;
                Self::parse(&text)?
            }
        };
        debug!(target: LOG_TARGET, cards = set.len(), "loaded card list");
        Ok(set)
    }
}
