// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use livegauge_core::{LiveGaugeError, RandomSteps, UpdatePayload};
use livegauge_sim::{LiveValueSimulator, SimulatorConfig, StopReason};
use livegauge_test_utils::{
    assert_no_recv, channel_sink, recv_timeout, FailingSink, RecordingSink, ScriptedSteps,
};
use std::time::Duration;

fn bullet_graph_feed() -> SimulatorConfig {
    SimulatorConfig::new(6954, 10_970, 400, 25_000).with_target(10_000)
}

#[tokio::test(start_paused = true)]
async fn test_bullet_graph_walk_stays_below_bound() -> anyhow::Result<()> {
    // Arrange
    let sink = RecordingSink::new();
    let simulator = LiveValueSimulator::new();

    // Act
    let handle = simulator.start(bullet_graph_feed(), sink.clone(), RandomSteps::seeded(2024))?;
    let report = handle.join().await?;

    // Assert
    let values = sink.values();
    assert!(!values.is_empty());
    assert!(values.iter().all(|value| *value < 10_970));

    let mut previous = 6954;
    for value in &values {
        let step = value - previous;
        assert!((0..400).contains(&step), "step {step} out of [0, 400)");
        previous = *value;
    }

    assert_eq!(report.reason, StopReason::BoundReached);
    assert_eq!(report.updates, values.len() as u64);
    assert_eq!(report.ticks, report.updates + 1);
    assert!(report.final_value >= 10_970);
    assert!(report.final_value - previous < 400);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_terminating_tick_sends_nothing() -> anyhow::Result<()> {
    // Arrange
    let sink = RecordingSink::new();
    let config = SimulatorConfig::new(6954, 7500, 400, 25_000);
    let steps = ScriptedSteps::new([100, 200, 300]);

    // Act
    let report = LiveValueSimulator::new()
        .start(config, sink.clone(), steps)?
        .join()
        .await?;

    // Assert
    assert_eq!(sink.values(), vec![7054, 7254]);
    assert_eq!(report.ticks, 3);
    assert_eq!(report.final_value, 7554);
    assert_eq!(report.reason, StopReason::BoundReached);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_first_tick_fires_after_one_interval() -> anyhow::Result<()> {
    // Arrange
    let (sink, mut rx) = channel_sink();
    let steps = ScriptedSteps::constant(10);

    // Act
    let handle = LiveValueSimulator::new().start(bullet_graph_feed(), sink, steps)?;

    // Assert
    assert_no_recv(&mut rx, 24_900).await;
    assert_eq!(
        recv_timeout(&mut rx, 200).await,
        Some(UpdatePayload::new(6964).with_target(10_000))
    );
    assert_no_recv(&mut rx, 24_800).await;
    assert_eq!(
        recv_timeout(&mut rx, 400).await,
        Some(UpdatePayload::new(6974).with_target(10_000))
    );

    handle.stop();
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_stop_is_idempotent_and_halts_updates() -> anyhow::Result<()> {
    // Arrange
    let (sink, mut rx) = channel_sink();
    let config = SimulatorConfig::new(0, 1_000_000, 10, 1_000);
    let handle = LiveValueSimulator::new().start(config, sink, ScriptedSteps::constant(1))?;
    assert!(recv_timeout(&mut rx, 1_500).await.is_some());

    // Act
    let first = handle.stop();
    let second = handle.stop();

    // Assert
    assert!(first);
    assert!(!second);
    assert!(!handle.is_running());

    let report = handle.join().await?;
    assert_eq!(report.reason, StopReason::Stopped);
    assert_eq!(report.updates, 1);
    assert_no_recv(&mut rx, 10_000).await;
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_stop_after_bound_reached_is_noop() -> anyhow::Result<()> {
    // Arrange
    let config = SimulatorConfig::new(95, 100, 10, 1_000);
    let handle =
        LiveValueSimulator::new().start(config, RecordingSink::new(), ScriptedSteps::constant(9))?;

    // Act
    tokio::time::sleep(Duration::from_millis(1_500)).await;

    // Assert
    assert!(!handle.is_running());
    assert!(!handle.stop());
    assert_eq!(handle.join().await?.reason, StopReason::BoundReached);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_dropping_handle_stops_feed() -> anyhow::Result<()> {
    // Arrange
    let (sink, mut rx) = channel_sink();
    let config = SimulatorConfig::new(0, 1_000_000, 10, 1_000);
    let handle = LiveValueSimulator::new().start(config, sink, ScriptedSteps::constant(1))?;
    assert!(recv_timeout(&mut rx, 1_500).await.is_some());

    // Act
    drop(handle);

    // Assert
    assert_no_recv(&mut rx, 5_000).await;
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_sink_failure_stops_ticking() -> anyhow::Result<()> {
    // Arrange
    let sink = FailingSink::after(2);
    let config = SimulatorConfig::new(0, 1_000_000, 10, 1_000);

    // Act
    let report = LiveValueSimulator::new()
        .start(config, sink.clone(), ScriptedSteps::constant(5))?
        .join()
        .await?;

    // Assert
    assert_eq!(report.reason, StopReason::SinkFailed);
    assert_eq!(report.updates, 2);
    assert_eq!(sink.attempts(), 3);
    assert_eq!(sink.accepted().len(), 2);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_tick_limit_bounds_zero_step_walk() -> anyhow::Result<()> {
    // Arrange
    let sink = RecordingSink::new();
    let config = SimulatorConfig::new(6954, 10_970, 400, 25_000).with_max_ticks(5);

    // Act
    let report = LiveValueSimulator::new()
        .start(config, sink.clone(), ScriptedSteps::constant(0))?
        .join()
        .await?;

    // Assert
    assert_eq!(report.reason, StopReason::TickLimit);
    assert_eq!(report.ticks, 5);
    assert_eq!(sink.values(), vec![6954; 5]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_start_at_bound_sends_nothing() -> anyhow::Result<()> {
    let sink = RecordingSink::new();
    let config = SimulatorConfig::new(10_970, 10_970, 400, 25_000);

    let report = LiveValueSimulator::new()
        .start(config, sink.clone(), RandomSteps::seeded(1))?
        .join()
        .await?;

    assert!(sink.is_empty());
    assert_eq!(report.ticks, 1);
    assert_eq!(report.reason, StopReason::BoundReached);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_min_step_guarantees_termination() -> anyhow::Result<()> {
    let sink = RecordingSink::new();
    let config = SimulatorConfig::new(0, 500, 400, 10).with_step_min(1);

    let report = livegauge_sim::start(config, sink.clone())?.join().await?;

    assert_eq!(report.reason, StopReason::BoundReached);
    assert!(report.ticks <= 500);
    assert!(sink.values().windows(2).all(|pair| pair[0] < pair[1]));
    Ok(())
}

#[tokio::test]
async fn test_invalid_config_is_rejected_synchronously() {
    let cases = [
        (SimulatorConfig::new(0, 100, 10, 0), "interval_ms"),
        (SimulatorConfig::new(0, 100, 10, -25_000), "interval_ms"),
        (SimulatorConfig::new(0, 100, 0, 1_000), "step_max"),
        (SimulatorConfig::new(0, 100, 10, 1_000).with_step_min(10), "step_min"),
        (SimulatorConfig::new(0, 100, 10, 1_000).with_max_ticks(0), "max_ticks"),
    ];

    for (config, expected_field) in cases {
        let sink = RecordingSink::new();
        let err = LiveValueSimulator::new()
            .start(config, sink.clone(), ScriptedSteps::constant(1))
            .unwrap_err();

        match err {
            LiveGaugeError::InvalidConfig { field, .. } => assert_eq!(field, expected_field),
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
        assert!(sink.is_empty());
    }
}
