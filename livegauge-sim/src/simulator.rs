// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timer-driven execution of a [`SimulatorState`].

use crate::state::{SimulatorState, Tick};
use crate::SimulatorConfig;
use core::sync::atomic::{AtomicBool, Ordering};
use livegauge_core::{CancellationToken, GaugeTask, RandomSteps, StepSource, UpdatePayload, UpdateSink};
use livegauge_error::{LiveGaugeError, Result};
use livegauge_runtime::{Timer, TokioTimer};
use std::sync::Arc;

/// Why a simulator stopped ticking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// A tick produced a value at or above the bound.
    BoundReached,
    /// [`SimulatorHandle::stop`] was called or the handle was dropped.
    Stopped,
    /// The sink returned an error.
    SinkFailed,
    /// `max_ticks` ticks elapsed.
    TickLimit,
}

/// Summary returned once a simulator task has finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulatorReport {
    pub ticks: u64,
    pub updates: u64,
    pub final_value: i64,
    pub reason: StopReason,
}

/// Spawns bounded random walks on a [`Timer`].
///
/// # Example
///
/// ```rust
/// use livegauge_core::{RandomSteps, Result, UpdatePayload};
/// use livegauge_sim::{LiveValueSimulator, SimulatorConfig, StopReason};
///
/// # #[tokio::main(flavor = "current_thread", start_paused = true)]
/// # async fn main() -> Result<()> {
/// let sink = |payload: &UpdatePayload| -> Result<()> {
///     assert!(payload.value < 10_970);
///     Ok(())
/// };
/// let config = SimulatorConfig::new(6954, 10_970, 400, 25_000).with_target(10_000);
///
/// let handle = LiveValueSimulator::new().start(config, sink, RandomSteps::seeded(7))?;
/// let report = handle.join().await?;
/// assert_eq!(report.reason, StopReason::BoundReached);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct LiveValueSimulator<T: Timer = TokioTimer> {
    timer: T,
}

impl LiveValueSimulator<TokioTimer> {
    pub fn new() -> Self {
        Self { timer: TokioTimer }
    }
}

impl<T: Timer> LiveValueSimulator<T> {
    pub fn with_timer(timer: T) -> Self {
        Self { timer }
    }

    /// Validate `config` and begin ticking every `config.interval_ms`.
    ///
    /// The first tick fires one interval after this call. Must be called
    /// from within a Tokio runtime.
    ///
    /// # Errors
    /// Returns `InvalidConfig` synchronously; nothing is spawned in that case.
    pub fn start<S, R>(&self, config: SimulatorConfig, sink: S, steps: R) -> Result<SimulatorHandle>
    where
        S: UpdateSink + 'static,
        R: StepSource + 'static,
    {
        let state = SimulatorState::new(&config)?;
        crate::info!(
            "simulator started: initial={} bound={} steps=[{}, {}) interval={}ms",
            config.initial_value, config.bound, config.step_min, config.step_max, config.interval_ms
        );

        let running = Arc::new(AtomicBool::new(true));
        let feed = Feed {
            timer: self.timer.clone(),
            state,
            target: config.target,
            max_ticks: config.max_ticks,
            sink,
            steps,
            running: running.clone(),
        };
        let task = GaugeTask::spawn(move |cancel| feed.run(cancel));

        Ok(SimulatorHandle {
            task,
            running,
            config,
        })
    }
}

/// Start a walk on the Tokio timer with an entropy-seeded step source.
///
/// # Errors
/// Returns `InvalidConfig` if `config` does not validate.
pub fn start<S>(config: SimulatorConfig, sink: S) -> Result<SimulatorHandle>
where
    S: UpdateSink + 'static,
{
    LiveValueSimulator::new().start(config, sink, RandomSteps::from_entropy())
}

struct Feed<T, S, R> {
    timer: T,
    state: SimulatorState,
    target: Option<i64>,
    max_ticks: Option<u64>,
    sink: S,
    steps: R,
    running: Arc<AtomicBool>,
}

impl<T, S, R> Feed<T, S, R>
where
    T: Timer,
    S: UpdateSink,
    R: StepSource,
{
    async fn run(mut self, cancel: CancellationToken) -> SimulatorReport {
        let interval = self.state.interval();
        let mut deadline = self.timer.now() + interval;
        let mut updates = 0_u64;

        let reason = loop {
            let wait = deadline - self.timer.now();
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break StopReason::Stopped,
                _ = self.timer.sleep_future(wait) => {}
            }
            deadline = deadline + interval;

            if cancel.is_cancelled() {
                break StopReason::Stopped;
            }

            match self.state.tick(&mut self.steps) {
                Tick::Update(value) => {
                    let payload = UpdatePayload {
                        value,
                        target: self.target,
                    };
                    crate::debug!("tick {}: {}", self.state.ticks(), payload);
                    if let Err(err) = self.sink.update(&payload) {
                        crate::warn!("sink rejected update {}: {}", payload, err);
                        break StopReason::SinkFailed;
                    }
                    updates += 1;
                }
                Tick::BoundReached(_) => break StopReason::BoundReached,
                Tick::Idle => break StopReason::Stopped,
            }

            if self.max_ticks.is_some_and(|limit| self.state.ticks() >= limit) {
                break StopReason::TickLimit;
            }
        };

        self.state.halt();
        self.running.store(false, Ordering::Release);
        crate::info!(
            "simulator stopped: reason={:?} ticks={} updates={} value={}",
            reason,
            self.state.ticks(),
            updates,
            self.state.current_value()
        );

        SimulatorReport {
            ticks: self.state.ticks(),
            updates,
            final_value: self.state.current_value(),
            reason,
        }
    }
}

/// Owned handle to a running walk.
///
/// Store it for as long as the display session lives. Dropping it stops
/// the walk at the next tick boundary.
#[derive(Debug)]
pub struct SimulatorHandle {
    task: GaugeTask<SimulatorReport>,
    running: Arc<AtomicBool>,
    config: SimulatorConfig,
}

impl SimulatorHandle {
    /// Cancel the schedule.
    ///
    /// Returns `true` if this call stopped a running walk. Calling it again,
    /// or after the bound was reached, does nothing and returns `false`.
    pub fn stop(&self) -> bool {
        self.task.cancel();
        let was_running = self.running.swap(false, Ordering::AcqRel);
        if was_running {
            crate::info!("simulator stop requested");
        }
        was_running
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Wait for the walk to finish.
    ///
    /// # Errors
    /// Returns `InvalidState` if the task panicked (for example inside the sink).
    pub async fn join(self) -> Result<SimulatorReport> {
        self.task
            .join()
            .await
            .ok_or_else(|| LiveGaugeError::invalid_state("simulator task panicked"))
    }
}
