// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use livegauge_chart::{ChartConfig, Renderer};
use livegauge_core::UpdatePayload;
use livegauge_error::{LiveGaugeError, Result};

/// Renderer that records what it was asked to do.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub rendered: Vec<ChartConfig>,
    pub feeds: Vec<String>,
    pub fail_render: bool,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A renderer whose `render` always fails.
    pub fn broken() -> Self {
        Self {
            fail_render: true,
            ..Self::default()
        }
    }

    /// Fed payloads parsed back from their feed strings.
    pub fn values(&self) -> Vec<i64> {
        self.feeds
            .iter()
            .filter_map(|feed| feed.parse::<UpdatePayload>().ok())
            .map(|payload| payload.value)
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, config: &ChartConfig) -> Result<()> {
        if self.fail_render {
            return Err(LiveGaugeError::user_error(std::io::Error::other(
                "container not found",
            )));
        }
        self.rendered.push(config.clone());
        Ok(())
    }

    fn feed_data(&mut self, payload: &UpdatePayload) -> Result<()> {
        self.feeds.push(payload.to_feed_string());
        Ok(())
    }
}
