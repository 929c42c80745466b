// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use livegauge::{ChartConfig, ColorRange, Renderer, Result, UpdatePayload};
use tracing::info;

/// Prints the chart instead of drawing it.
#[derive(Debug, Default)]
pub struct ConsoleRenderer {
    prefix: String,
    bands: ColorRange,
    updates: usize,
}

impl ConsoleRenderer {
    pub fn updates(&self) -> usize {
        self.updates
    }
}

impl Renderer for ConsoleRenderer {
    fn render(&mut self, config: &ChartConfig) -> Result<()> {
        let chart = config.attributes();
        self.prefix = chart.number_prefix.clone().unwrap_or_default();
        self.bands = config.data_source.color_range.clone().unwrap_or_default();

        info!(
            "rendering {:?} '{} {}' into #{} ({}x{}), scale up to {}",
            config.chart_type,
            chart.caption.as_deref().unwrap_or(""),
            chart.subcaption.as_deref().unwrap_or(""),
            config.render_at.as_deref().unwrap_or("body"),
            config.width.unwrap_or_default(),
            config.height.unwrap_or_default(),
            chart.upper_limit.unwrap_or_default(),
        );
        Ok(())
    }

    fn feed_data(&mut self, payload: &UpdatePayload) -> Result<()> {
        self.updates += 1;
        let band = self.bands.color_for(payload.value as f64).unwrap_or("none");
        let target = payload
            .target
            .map(|target| format!(" (target {}{target})", self.prefix))
            .unwrap_or_default();

        println!(
            "{:>4}  {}{:<6} {band}{target}   feedData(\"{payload}\")",
            self.updates, self.prefix, payload.value
        );
        Ok(())
    }
}
