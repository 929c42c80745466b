// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The bounded walk itself, independent of any clock.

use crate::SimulatorConfig;
use core::time::Duration;
use livegauge_core::StepSource;
use livegauge_error::Result;

/// Outcome of a single tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// The new value is below the bound and must be sent.
    Update(i64),
    /// The new value reached the bound; nothing is sent and the walk is over.
    BoundReached(i64),
    /// The walk had already stopped; no step was drawn.
    Idle,
}

/// Mutable state of one walk.
///
/// `current_value` never decreases, and `running` goes from `true` to
/// `false` exactly once.
#[derive(Clone, Debug)]
pub struct SimulatorState {
    current_value: i64,
    bound: i64,
    step_min: i64,
    step_max: i64,
    interval: Duration,
    running: bool,
    ticks: u64,
}

impl SimulatorState {
    /// # Errors
    /// Returns `InvalidConfig` if `config` does not validate.
    pub fn new(config: &SimulatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            current_value: config.initial_value,
            bound: config.bound,
            step_min: config.step_min,
            step_max: config.step_max,
            interval: config.interval(),
            running: true,
            ticks: 0,
        })
    }

    pub fn current_value(&self) -> i64 {
        self.current_value
    }

    pub fn bound(&self) -> i64 {
        self.bound
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ticks that drew a step.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Apply one already-drawn step.
    ///
    /// Negative steps count as zero, so the walk never moves backwards.
    pub fn advance(&mut self, step: i64) -> Tick {
        if !self.running {
            return Tick::Idle;
        }

        self.ticks += 1;
        self.current_value = self.current_value.saturating_add(step.max(0));
        if self.current_value < self.bound {
            Tick::Update(self.current_value)
        } else {
            self.running = false;
            Tick::BoundReached(self.current_value)
        }
    }

    /// Draw a step from `steps` and apply it.
    pub fn tick<S: StepSource + ?Sized>(&mut self, steps: &mut S) -> Tick {
        if !self.running {
            return Tick::Idle;
        }
        let step = steps.draw(self.step_min, self.step_max);
        self.advance(step)
    }

    /// Stop the walk. Returns `true` if it was running.
    pub fn halt(&mut self) -> bool {
        core::mem::replace(&mut self.running, false)
    }

    /// Drive the walk synchronously, yielding every value that would be sent.
    ///
    /// ```
    /// use livegauge_core::RandomSteps;
    /// use livegauge_sim::{SimulatorConfig, SimulatorState};
    ///
    /// let mut state = SimulatorState::new(&SimulatorConfig::new(0, 100, 10, 1)).unwrap();
    /// let values: Vec<i64> = state.walk(RandomSteps::seeded(1)).collect();
    ///
    /// assert!(values.iter().all(|v| *v < 100));
    /// assert!(!state.is_running());
    /// ```
    pub fn walk<S: StepSource>(&mut self, steps: S) -> Walk<'_, S> {
        Walk { state: self, steps }
    }
}

/// Iterator returned by [`SimulatorState::walk`].
#[derive(Debug)]
pub struct Walk<'a, S> {
    state: &'a mut SimulatorState,
    steps: S,
}

impl<S: StepSource> Iterator for Walk<'_, S> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        match self.state.tick(&mut self.steps) {
            Tick::Update(value) => Some(value),
            Tick::BoundReached(_) | Tick::Idle => None,
        }
    }
}
