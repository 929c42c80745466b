// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Random step draws for the bounded walk.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of walk increments.
pub trait StepSource: Send {
    /// Draw an integer in `[low, high)`. Callers guarantee `low < high`.
    fn draw(&mut self, low: i64, high: i64) -> i64;
}

/// Uniform draws from a ChaCha8 generator.
///
/// ```
/// use livegauge_core::{RandomSteps, StepSource};
///
/// let mut a = RandomSteps::seeded(12345);
/// let mut b = RandomSteps::seeded(12345);
/// let step = a.draw(0, 400);
/// assert!((0..400).contains(&step));
/// assert_eq!(step, b.draw(0, 400));
/// ```
#[derive(Clone, Debug)]
pub struct RandomSteps {
    rng: ChaCha8Rng,
    seed: u64,
}

impl RandomSteps {
    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Fresh seed from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }

    /// Seed this source was created with, for replaying a run.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl StepSource for RandomSteps {
    fn draw(&mut self, low: i64, high: i64) -> i64 {
        self.rng.random_range(low..high)
    }
}
