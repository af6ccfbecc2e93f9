//! Caller configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::CallerError;

/// Default time each card stays up during auto-play.
pub const DEFAULT_INTERVAL_MS: u64 = 15_000;

/// Configuration for a `GameController`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallerConfig {
    /// Auto-play interval in milliseconds. Must be non-zero.
    pub interval_ms: u64,

    /// Shuffle seed. `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Prefix for the asset references of the built-in card set.
    pub asset_prefix: String,
}

impl Default for CallerConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            seed: None,
            asset_prefix: "cards".to_string(),
        }
    }
}

impl CallerConfig {
    /// Set the auto-play interval.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the auto-play interval in milliseconds.
    #[must_use]
    pub fn with_interval_ms(mut self, ms: u64) -> Self {
        self.interval_ms = ms;
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_asset_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.asset_prefix = prefix.into();
        self
    }

    /// The interval as a `Duration`.
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Check the configuration before a controller is built from it.
    pub fn validate(&self) -> Result<(), CallerError> {
        if self.interval_ms == 0 {
            return Err(CallerError::ZeroInterval);
        }
        Ok(())
    }
}
