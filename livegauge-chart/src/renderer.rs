// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::ChartConfig;
use livegauge_core::{UpdatePayload, UpdateSink};
use livegauge_error::Result;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// External chart renderer.
///
/// livegauge never draws anything. A renderer receives the static
/// configuration once and then a stream of updates.
pub trait Renderer: Send + 'static {
    /// Build the chart from its configuration.
    fn render(&mut self, config: &ChartConfig) -> Result<()>;

    /// Apply one live update.
    fn feed_data(&mut self, payload: &UpdatePayload) -> Result<()>;
}

/// Lifecycle signals a renderer emits after [`Renderer::render`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderEvent {
    /// The chart object exists and accepts calls.
    Ready,
    /// The chart has been drawn.
    #[default]
    Rendered,
}

/// Forwards simulator updates to a shared renderer.
#[derive(Debug)]
pub struct RendererSink<R> {
    renderer: Arc<Mutex<R>>,
}

impl<R> RendererSink<R> {
    pub fn new(renderer: Arc<Mutex<R>>) -> Self {
        Self { renderer }
    }
}

impl<R> Clone for RendererSink<R> {
    fn clone(&self) -> Self {
        Self {
            renderer: self.renderer.clone(),
        }
    }
}

impl<R: Renderer> UpdateSink for RendererSink<R> {
    fn update(&mut self, payload: &UpdatePayload) -> Result<()> {
        self.renderer.lock().feed_data(payload)
    }
}
