//! Serializable read model of a game.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::controller::GamePhase;
use crate::cards::Card;
use crate::timer::TimerStatus;

/// Everything a front end needs to draw one frame.
///
/// Built by `GameController::snapshot`. The history is a persistent
/// vector, so taking a snapshot every frame does not copy the cards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub timer: TimerStatus,
    pub current: Option<Card>,
    pub history: Vector<Card>,
    pub cards_left: usize,
    pub total_cards: usize,
    pub remaining_ms: u64,
    pub interval_ms: u64,
}

impl GameSnapshot {
    /// Called cards laid out in rows of `columns`, oldest first.
    ///
    /// Returns no rows when `columns` is zero.
    #[must_use]
    pub fn history_rows(&self, columns: usize) -> Vec<Vec<&Card>> {
        if columns == 0 {
            return Vec::new();
        }
        let cards: Vec<&Card> = self.history.iter().collect();
        cards.chunks(columns).map(<[&Card]>::to_vec).collect()
    }
}
