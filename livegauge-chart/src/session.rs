// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A display session: one chart, one renderer, at most one live feed.

use crate::chart_config::integer_field;
use crate::{ChartConfig, RenderEvent, Renderer, RendererSink};
use futures::{Stream, StreamExt};
use livegauge_core::RandomSteps;
use livegauge_error::{LiveGaugeError, Result, ResultExt};
use livegauge_runtime::{Timer, TokioTimer};
use livegauge_sim::{LiveValueSimulator, SimulatorConfig, SimulatorHandle, SimulatorReport};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// The `[feed]` section of a session file.
///
/// `initial_value` and `target` fall back to the chart's `dataSource`;
/// `bound` falls back to the chart's `upperLimit`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeedConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bound: Option<i64>,
    pub step_max: i64,
    #[serde(default)]
    pub step_min: i64,
    pub interval_ms: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<i64>,
    /// Fixed seed for reproducible walks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_ticks: Option<u64>,
    /// Renderer event that starts the feed.
    #[serde(default)]
    pub trigger: RenderEvent,
}

impl FeedConfig {
    /// Merge with chart defaults into a validated simulator config.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if no start value or bound can be determined,
    /// or if the merged parameters do not validate.
    pub fn resolve(&self, chart: &ChartConfig) -> Result<SimulatorConfig> {
        let initial_value = match self.initial_value {
            Some(value) => value,
            None => chart.initial_feed_value()?.ok_or_else(|| {
                LiveGaugeError::invalid_config(
                    "feed.initial_value",
                    "not set and the chart declares no value",
                )
            })?,
        };
        let bound = match (self.bound, chart.data_source.chart.upper_limit) {
            (Some(bound), _) => bound,
            (None, Some(upper)) => integer_field("chart.upperLimit", upper)?,
            (None, None) => {
                return Err(LiveGaugeError::invalid_config(
                    "feed.bound",
                    "not set and the chart declares no upperLimit",
                ))
            }
        };
        let target = match self.target {
            Some(target) => Some(target),
            None => chart.target_feed_value()?,
        };

        let config = SimulatorConfig {
            initial_value,
            bound,
            step_max: self.step_max,
            step_min: self.step_min,
            interval_ms: self.interval_ms,
            target,
            max_ticks: self.max_ticks,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Chart plus feed, as stored in a session file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub chart: ChartConfig,
    pub feed: FeedConfig,
}

impl SessionConfig {
    /// # Errors
    /// `ConfigParse` for malformed JSON, `InvalidConfig` if validation fails.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| LiveGaugeError::config_parse("json", err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// `ConfigParse` for malformed TOML, `InvalidConfig` if validation fails.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml)
            .map_err(|err| LiveGaugeError::config_parse("toml", err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a `.json` or `.toml` session file.
    ///
    /// # Errors
    /// `Io` if the file cannot be read, `InvalidConfig` for other extensions,
    /// plus the errors of the matching `from_*_str`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|err| LiveGaugeError::io(format!("reading {}", path.display()), err))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_str(&contents),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::from_toml_str(&contents),
            _ => Err(LiveGaugeError::invalid_config(
                "path",
                format!("{} is neither .json nor .toml", path.display()),
            )),
        }
    }

    /// # Errors
    /// Returns `InvalidConfig` from the chart or the resolved feed.
    pub fn validate(&self) -> Result<()> {
        self.chart.validate()?;
        self.feed.resolve(&self.chart).map(|_| ())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Created,
    Rendered,
    Live,
    Ended,
}

/// Binds a chart, its renderer and a live value feed.
///
/// Lifecycle: [`render`](Self::render), then renderer events through
/// [`handle_event`](Self::handle_event) or [`drive`](Self::drive); the
/// configured trigger event starts the simulator once. [`end`](Self::end)
/// stops it.
pub struct LiveSession<R, T: Timer = TokioTimer> {
    chart: ChartConfig,
    feed: FeedConfig,
    simulator_config: SimulatorConfig,
    renderer: Arc<Mutex<R>>,
    simulator: LiveValueSimulator<T>,
    handle: Option<SimulatorHandle>,
    phase: Phase,
}

impl<R: Renderer> LiveSession<R, TokioTimer> {
    /// # Errors
    /// Returns `InvalidConfig` if the session does not validate.
    pub fn new(config: SessionConfig, renderer: R) -> Result<Self> {
        Self::with_timer(config, renderer, TokioTimer)
    }
}

impl<R: Renderer, T: Timer> LiveSession<R, T> {
    /// # Errors
    /// Returns `InvalidConfig` if the session does not validate.
    pub fn with_timer(config: SessionConfig, renderer: R, timer: T) -> Result<Self> {
        config.chart.validate()?;
        let simulator_config = config.feed.resolve(&config.chart)?;
        Ok(Self {
            chart: config.chart,
            feed: config.feed,
            simulator_config,
            renderer: Arc::new(Mutex::new(renderer)),
            simulator: LiveValueSimulator::with_timer(timer),
            handle: None,
            phase: Phase::Created,
        })
    }

    pub fn chart(&self) -> &ChartConfig {
        &self.chart
    }

    pub fn simulator_config(&self) -> &SimulatorConfig {
        &self.simulator_config
    }

    /// Shared access to the renderer, e.g. to inspect it after the session.
    pub fn renderer(&self) -> Arc<Mutex<R>> {
        self.renderer.clone()
    }

    pub fn handle(&self) -> Option<&SimulatorHandle> {
        self.handle.as_ref()
    }

    pub fn is_live(&self) -> bool {
        self.handle.as_ref().is_some_and(SimulatorHandle::is_running)
    }

    /// Hand the chart configuration to the renderer.
    ///
    /// # Errors
    /// `InvalidState` if already rendered, or the renderer's own error.
    pub fn render(&mut self) -> Result<()> {
        if self.phase != Phase::Created {
            return Err(LiveGaugeError::invalid_state("chart already rendered"));
        }
        self.renderer
            .lock()
            .render(&self.chart)
            .context("rendering chart")?;
        self.phase = Phase::Rendered;
        Ok(())
    }

    /// React to a renderer lifecycle event.
    ///
    /// Returns `true` if this event started the live feed. Non-trigger events
    /// and repeated triggers are ignored.
    ///
    /// # Errors
    /// `InvalidState` before [`render`](Self::render) or after [`end`](Self::end).
    pub fn handle_event(&mut self, event: RenderEvent) -> Result<bool> {
        match self.phase {
            Phase::Created => Err(LiveGaugeError::invalid_state(format!(
                "received {event:?} before the chart was rendered"
            ))),
            Phase::Ended => Err(LiveGaugeError::invalid_state(format!(
                "received {event:?} after the session ended"
            ))),
            Phase::Live => Ok(false),
            Phase::Rendered if event != self.feed.trigger => Ok(false),
            Phase::Rendered => {
                let steps = self
                    .feed
                    .seed
                    .map_or_else(RandomSteps::from_entropy, RandomSteps::seeded);
                livegauge_sim::info!("{:?} received: starting live feed (seed {})", event, steps.seed());
                let sink = RendererSink::new(self.renderer.clone());
                let handle = self
                    .simulator
                    .start(self.simulator_config.clone(), sink, steps)?;
                self.handle = Some(handle);
                self.phase = Phase::Live;
                Ok(true)
            }
        }
    }

    /// Consume renderer events until the stream ends.
    ///
    /// # Errors
    /// The first error returned by [`handle_event`](Self::handle_event).
    pub async fn drive<E>(&mut self, events: E) -> Result<()>
    where
        E: Stream<Item = RenderEvent>,
    {
        let mut events = core::pin::pin!(events);
        while let Some(event) = events.next().await {
            self.handle_event(event)?;
        }
        Ok(())
    }

    /// End the session, stopping the feed if it is still ticking.
    ///
    /// Returns the simulator report, or `None` if the feed never started.
    /// Ending twice is a no-op.
    ///
    /// # Errors
    /// `InvalidState` if the simulator task panicked.
    pub async fn end(&mut self) -> Result<Option<SimulatorReport>> {
        self.phase = Phase::Ended;
        let Some(handle) = self.handle.take() else {
            return Ok(None);
        };
        handle.stop();
        let report = handle.join().await?;
        livegauge_sim::info!(
            "session ended: {:?} after {} updates",
            report.reason,
            report.updates
        );
        Ok(Some(report))
    }
}
