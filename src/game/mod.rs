//! Game controller: phases, commands and the auto-advance tick.

pub mod controller;
pub mod snapshot;

pub use controller::{Advance, GameController, GamePhase};
pub use snapshot::GameSnapshot;
