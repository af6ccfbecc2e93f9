//! Core building blocks: randomness, time, configuration, errors.
//!
//! Nothing in here knows about cards or games. The deck, timer and
//! controller modules consume these through plain values and traits.

pub mod clock;
pub mod config;
pub mod error;
pub mod rng;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::{CallerConfig, DEFAULT_INTERVAL_MS};
pub use error::{CallerError, CardSetError};
pub use rng::GameRng;
