// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for livegauge.
//!
//! - `sinks` - [`RecordingSink`], [`ChannelSink`] and [`FailingSink`]
//! - `steps` - [`ScriptedSteps`], a deterministic [`StepSource`](livegauge_core::StepSource)
//! - `renderer` - [`RecordingRenderer`] for session tests
//! - `fixtures` - the bullet-graph and angular-gauge sample configurations
//! - `helpers` - timed receive assertions
//!
//! ```rust
//! use livegauge_core::{UpdatePayload, UpdateSink};
//! use livegauge_test_utils::RecordingSink;
//!
//! let sink = RecordingSink::new();
//! let mut feed = sink.clone();
//! feed.update(&UpdatePayload::new(7000)).unwrap();
//! assert_eq!(sink.values(), vec![7000]);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod fixtures;
pub mod helpers;
pub mod renderer;
pub mod sinks;
pub mod steps;

pub use helpers::{assert_no_recv, recv_timeout};
pub use renderer::RecordingRenderer;
pub use sinks::{channel_sink, ChannelSink, FailingSink, RecordingSink};
pub use steps::ScriptedSteps;
