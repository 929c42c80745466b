// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Chart configuration and renderer sessions.
//!
//! A chart is described by the same nested object a real-time charting
//! library takes at construction; this crate parses and validates it,
//! and binds it to a [`Renderer`] fed by a live value simulator.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
mod numeric;

pub mod attributes;
pub mod chart_config;
pub mod chart_type;
pub mod color_range;
pub mod renderer;
pub mod session;

pub use attributes::{ChartAttributes, StreamSettings};
pub use chart_config::{ChartConfig, DataSource, Dial, Dials};
pub use chart_type::ChartType;
pub use color_range::{ColorBand, ColorRange};
pub use renderer::{RenderEvent, Renderer, RendererSink};
pub use session::{FeedConfig, LiveSession, SessionConfig};
