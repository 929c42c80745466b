// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use livegauge_core::{RandomSteps, StepSource};

#[test]
fn test_draws_stay_in_half_open_range() {
    let mut steps = RandomSteps::seeded(7);
    for _ in 0..10_000 {
        let step = steps.draw(0, 400);
        assert!((0..400).contains(&step), "step {step} out of range");
    }
}

#[test]
fn test_single_value_range() {
    let mut steps = RandomSteps::seeded(7);
    assert!((0..100).all(|_| steps.draw(1, 2) == 1));
}

#[test]
fn test_same_seed_replays_sequence() {
    let mut first = RandomSteps::seeded(12345);
    let mut replay = RandomSteps::seeded(first.seed());

    let a: Vec<i64> = (0..32).map(|_| first.draw(0, 400)).collect();
    let b: Vec<i64> = (0..32).map(|_| replay.draw(0, 400)).collect();
    assert_eq!(a, b);
}

#[test]
fn test_draws_cover_range() {
    let mut steps = RandomSteps::seeded(99);
    let mut seen = [false; 10];
    for _ in 0..1_000 {
        seen[steps.draw(0, 10) as usize] = true;
    }
    assert!(seen.iter().all(|hit| *hit));
}
