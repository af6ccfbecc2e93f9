//! Interval timer for auto-play.

pub mod interval;

pub use interval::{IntervalTimer, TimerStatus};
