// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # livegauge
//!
//! Simulated live data for real-time gauges and bullet graphs.
//!
//! ## Overview
//!
//! A [`LiveValueSimulator`] runs a periodic bounded random walk: every tick it
//! adds a random step to the current value and pushes the result to an
//! [`UpdateSink`], until the value reaches its bound. A [`LiveSession`] binds
//! that walk to a chart configuration and an external [`Renderer`], starting
//! the feed when the renderer reports the chart as drawn.
//!
//! The crates are also usable on their own:
//!
//! - `livegauge-sim` - the walk and its timer-driven handle
//! - `livegauge-chart` - chart configuration schema and renderer sessions
//! - `livegauge-core` - payloads, sinks, step sources and task plumbing
//! - `livegauge-runtime` - the [`Timer`] abstraction
//! - `livegauge-error` - [`LiveGaugeError`]
//!
//! ## Quick Start
//!
//! ```rust
//! use livegauge::prelude::*;
//!
//! #[tokio::main(flavor = "current_thread", start_paused = true)]
//! async fn main() -> Result<()> {
//!     let config = SimulatorConfig::new(6954, 10_970, 400, 25_000).with_target(10_000);
//!     let sink = |payload: &UpdatePayload| -> Result<()> {
//!         println!("feedData({payload})");
//!         Ok(())
//!     };
//!
//!     let handle = LiveValueSimulator::new().start(config, sink, RandomSteps::seeded(3))?;
//!     let report = handle.join().await?;
//!     assert_eq!(report.reason, StopReason::BoundReached);
//!     Ok(())
//! }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub use livegauge_chart::{
    ChartAttributes, ChartConfig, ChartType, ColorBand, ColorRange, FeedConfig, LiveSession,
    RenderEvent, Renderer, RendererSink, SessionConfig, StreamSettings,
};
pub use livegauge_core::{RandomSteps, StepSource, UpdatePayload, UpdateSink};
pub use livegauge_error::{LiveGaugeError, Result, ResultExt};
pub use livegauge_runtime::{Timer, TokioTimer};
pub use livegauge_sim::{
    start, LiveValueSimulator, SimulatorConfig, SimulatorHandle, SimulatorReport, SimulatorState,
    StopReason, Tick,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use livegauge_chart::{ChartConfig, LiveSession, RenderEvent, Renderer, SessionConfig};
    pub use livegauge_core::{RandomSteps, StepSource, UpdatePayload, UpdateSink};
    pub use livegauge_error::{LiveGaugeError, Result, ResultExt};
    pub use livegauge_sim::{LiveValueSimulator, SimulatorConfig, SimulatorHandle, StopReason};
}
