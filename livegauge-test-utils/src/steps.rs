// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use livegauge_core::StepSource;
use std::collections::VecDeque;

/// Replays a fixed list of steps, then repeats a fallback step.
///
/// Scripted steps are returned as-is; keep them inside the configured range.
/// Once the script runs out the fallback is clamped into `[low, high)`.
#[derive(Clone, Debug)]
pub struct ScriptedSteps {
    script: VecDeque<i64>,
    fallback: i64,
    draws: usize,
}

impl ScriptedSteps {
    pub fn new(script: impl IntoIterator<Item = i64>) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback: 0,
            draws: 0,
        }
    }

    /// Always draw `step`.
    pub fn constant(step: i64) -> Self {
        Self::new([]).then_repeat(step)
    }

    #[must_use]
    pub fn then_repeat(mut self, step: i64) -> Self {
        self.fallback = step;
        self
    }

    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl StepSource for ScriptedSteps {
    fn draw(&mut self, low: i64, high: i64) -> i64 {
        self.draws += 1;
        self.script
            .pop_front()
            .unwrap_or_else(|| self.fallback.clamp(low, high - 1))
    }
}
