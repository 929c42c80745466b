// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Live value simulator.
//!
//! Generates a non-decreasing pseudo-random sequence on a fixed schedule and
//! pushes each value to an [`UpdateSink`](livegauge_core::UpdateSink) until
//! the value reaches a bound.
//!
//! - [`SimulatorConfig`] - walk parameters, validated before anything runs
//! - [`SimulatorState`] - the walk itself, drivable without a clock
//! - [`LiveValueSimulator`] - spawns walks on a [`Timer`](livegauge_runtime::Timer)
//! - [`SimulatorHandle`] - owned handle used to stop or await a walk

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[doc(hidden)]
pub mod logging;

pub mod config;
pub mod simulator;
pub mod state;

pub use config::SimulatorConfig;
pub use simulator::{start, LiveValueSimulator, SimulatorHandle, SimulatorReport, StopReason};
pub use state::{SimulatorState, Tick, Walk};
