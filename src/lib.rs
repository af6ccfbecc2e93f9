//! # loteria-caller
//!
//! A card caller for Loteria-style matching games: shuffles a deck, calls
//! cards one at a time on request or on a timer, and keeps the history of
//! called cards.
//!
//! ## Design Principles
//!
//! 1. **Presentation-agnostic**: The crate never draws anything and never
//!    schedules its own wake-ups. A front end reads state and issues
//!    commands; it calls `tick()` from whatever loop it already has.
//!
//! 2. **Injected time and randomness**: Time comes from a `Clock`, shuffles
//!    from a seedable `GameRng`. Tests run on a `ManualClock` and fixed
//!    seeds.
//!
//! 3. **No-op on bad timing**: Commands issued in the wrong phase are
//!    ignored, never fatal.
//!
//! ## Modules
//!
//! - `core`: RNG, clocks, configuration, errors
//! - `cards`: Card values, validated card sets, card-set providers
//! - `sequence`: Deck and call history
//! - `timer`: Pausable interval timer
//! - `game`: Game controller and snapshots

pub mod cards;
pub mod core;
pub mod game;
pub mod sequence;
pub mod timer;

// Re-export commonly used types
pub use crate::core::{
    CallerConfig, CallerError, CardSetError, Clock, GameRng, ManualClock,
    MonotonicClock,
};

pub use crate::cards::{AssetRef, Card, CardId, CardSet, CardSetProvider, JsonCardSet, StandardDeck};

pub use crate::sequence::{Deck, Sequencer};

pub use crate::timer::{IntervalTimer, TimerStatus};

pub use crate::game::{Advance, GameController, GamePhase, GameSnapshot};
