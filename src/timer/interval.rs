//! Pausable countdown timer.
//!
//! The timer stores instants rather than counting down, so it never needs
//! to be polled to stay accurate. All methods take `now` from the owner's
//! clock; the timer itself never reads time.
//!
//! ## Pausing
//!
//! `pause` freezes the elapsed time at `paused_at - started_at`. `resume`
//! then moves `started_at` forward by the length of the pause, so the time
//! spent paused is neither counted nor lost.
//!
//! ```
//! use std::time::Duration;
//! use loteria_caller::timer::IntervalTimer;
//!
//! let ms = Duration::from_millis;
//! let mut timer = IntervalTimer::new(ms(10_000));
//!
//! timer.start(ms(0));
//! timer.pause(ms(4_000));
//! timer.resume(ms(9_000));
//! assert_eq!(timer.remaining(ms(10_000)), ms(5_000));
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Observable state of an `IntervalTimer`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerStatus {
    /// Not armed.
    Idle,
    /// Counting down.
    Running,
    /// Armed but frozen.
    Paused,
    /// Running with no time left.
    Expired,
}

/// Countdown over a configurable interval with drift-free pause/resume.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalTimer {
    duration: Duration,
    started_at: Option<Duration>,
    paused_at: Option<Duration>,
}

impl IntervalTimer {
    /// Create an idle timer.
    ///
    /// A zero `duration` produces a timer that expires as soon as it is
    /// started; callers validate durations before they get here.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            started_at: None,
            paused_at: None,
        }
    }

    /// Arm (or re-arm) the timer for a full interval starting at `now`.
    pub fn start(&mut self, now: Duration) {
        self.started_at = Some(now);
        self.paused_at = None;
    }

    /// Disarm the timer.
    pub fn stop(&mut self) {
        self.started_at = None;
        self.paused_at = None;
    }

    /// Freeze the countdown. No-op unless running and not already paused.
    pub fn pause(&mut self, now: Duration) {
        if self.started_at.is_some() && self.paused_at.is_none() {
            self.paused_at = Some(now);
        }
    }

    /// Continue a paused countdown. No-op unless paused.
    pub fn resume(&mut self, now: Duration) {
        if let (Some(started_at), Some(paused_at)) = (self.started_at, self.paused_at.take()) {
            self.started_at = Some(started_at + now.saturating_sub(paused_at));
        }
    }

    /// Change the interval.
    ///
    /// A running, unpaused timer is re-armed at `now` so the new interval
    /// counts from the change. Idle and paused timers only store it.
    pub fn set_duration(&mut self, duration: Duration, now: Duration) {
        self.duration = duration;
        if self.is_running() && !self.is_paused() {
            self.start(now);
        }
    }

    /// Time counted against the interval so far.
    fn elapsed(&self, now: Duration) -> Duration {
        match (self.started_at, self.paused_at) {
            (None, _) => Duration::ZERO,
            (Some(started_at), Some(paused_at)) => paused_at.saturating_sub(started_at),
            (Some(started_at), None) => now.saturating_sub(started_at),
        }
    }

    /// Time left, always within `[0, duration]`.
    #[must_use]
    pub fn remaining(&self, now: Duration) -> Duration {
        self.duration.saturating_sub(self.elapsed(now))
    }

    /// True once a running, unpaused timer has no time left.
    #[must_use]
    pub fn expired(&self, now: Duration) -> bool {
        self.is_running() && !self.is_paused() && self.remaining(now).is_zero()
    }

    /// Fraction of the interval used up, in `[0.0, 1.0]`.
    #[must_use]
    pub fn progress(&self, now: Duration) -> f64 {
        if self.duration.is_zero() {
            return if self.is_running() { 1.0 } else { 0.0 };
        }
        let used = self.duration - self.remaining(now);
        (used.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn status(&self, now: Duration) -> TimerStatus {
        if !self.is_running() {
            TimerStatus::Idle
        } else if self.is_paused() {
            TimerStatus::Paused
        } else if self.expired(now) {
            TimerStatus::Expired
        } else {
            TimerStatus::Running
        }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Armed, paused or not.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }
}
