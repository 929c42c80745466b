// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;
use livegauge_error::{LiveGaugeError, Result};
use serde::{Deserialize, Serialize};

/// Parameters of one bounded random walk.
///
/// Every tick adds a step drawn from `[step_min, step_max)` to the current
/// value. Values strictly below `bound` are pushed to the sink; the first
/// value at or above `bound` ends the walk without being sent.
///
/// ```
/// use livegauge_sim::SimulatorConfig;
///
/// let config = SimulatorConfig::new(6954, 10_970, 400, 25_000).with_target(10_000);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.interval().as_secs(), 25);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    pub initial_value: i64,
    pub bound: i64,
    pub step_max: i64,
    #[serde(default)]
    pub step_min: i64,
    pub interval_ms: i64,
    /// Secondary value sent alongside every update (bullet-graph target).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<i64>,
    /// Stop after this many ticks even if the bound was not reached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_ticks: Option<u64>,
}

impl SimulatorConfig {
    pub const fn new(initial_value: i64, bound: i64, step_max: i64, interval_ms: i64) -> Self {
        Self {
            initial_value,
            bound,
            step_max,
            step_min: 0,
            interval_ms,
            target: None,
            max_ticks: None,
        }
    }

    #[must_use]
    pub const fn with_target(mut self, target: i64) -> Self {
        self.target = Some(target);
        self
    }

    #[must_use]
    pub const fn with_step_min(mut self, step_min: i64) -> Self {
        self.step_min = step_min;
        self
    }

    #[must_use]
    pub const fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    /// Check the parameters before anything is scheduled.
    ///
    /// # Errors
    /// Returns [`LiveGaugeError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        if self.interval_ms <= 0 {
            return Err(LiveGaugeError::invalid_config(
                "interval_ms",
                format!("must be positive, got {}", self.interval_ms),
            ));
        }
        if self.step_max <= 0 {
            return Err(LiveGaugeError::invalid_config(
                "step_max",
                format!("must be positive, got {}", self.step_max),
            ));
        }
        if self.step_min < 0 || self.step_min >= self.step_max {
            return Err(LiveGaugeError::invalid_config(
                "step_min",
                format!(
                    "must lie in [0, {}), got {}",
                    self.step_max, self.step_min
                ),
            ));
        }
        if self.max_ticks == Some(0) {
            return Err(LiveGaugeError::invalid_config(
                "max_ticks",
                "must be positive when set",
            ));
        }
        Ok(())
    }

    /// Tick period. Only meaningful after [`validate`](Self::validate).
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(0).unsigned_abs())
    }
}
