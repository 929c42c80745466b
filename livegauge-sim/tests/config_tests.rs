// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use livegauge_core::LiveGaugeError;
use livegauge_sim::SimulatorConfig;
use std::time::Duration;

#[test]
fn test_bullet_graph_config_validates() {
    let config = SimulatorConfig::new(6954, 10_970, 400, 25_000);

    assert!(config.validate().is_ok());
    assert_eq!(config.interval(), Duration::from_secs(25));
    assert_eq!(config.step_min, 0);
    assert_eq!(config.target, None);
}

#[test]
fn test_step_min_equal_to_max_is_rejected() {
    let err = SimulatorConfig::new(0, 100, 5, 1_000)
        .with_step_min(5)
        .validate()
        .unwrap_err();

    assert!(err.is_config_error());
    assert!(err.to_string().contains("step_min"));
}

#[test]
fn test_negative_step_min_is_rejected() {
    let err = SimulatorConfig::new(0, 100, 5, 1_000)
        .with_step_min(-1)
        .validate()
        .unwrap_err();

    assert!(matches!(err, LiveGaugeError::InvalidConfig { ref field, .. } if field == "step_min"));
}

#[test]
fn test_negative_step_max_is_rejected() {
    let err = SimulatorConfig::new(0, 100, -400, 1_000)
        .validate()
        .unwrap_err();

    assert!(matches!(err, LiveGaugeError::InvalidConfig { ref field, .. } if field == "step_max"));
}

#[test]
fn test_deserialize_applies_defaults() -> anyhow::Result<()> {
    let config: SimulatorConfig = serde_json::from_str(
        r#"{"initial_value":6954,"bound":10970,"step_max":400,"interval_ms":25000}"#,
    )?;

    assert_eq!(config, SimulatorConfig::new(6954, 10_970, 400, 25_000));
    Ok(())
}

#[test]
fn test_serialize_omits_unset_options() -> anyhow::Result<()> {
    let json = serde_json::to_value(SimulatorConfig::new(1, 2, 3, 4).with_target(9))?;

    assert_eq!(json["target"], 9);
    assert!(json.get("max_ticks").is_none());
    assert_eq!(json["step_min"], 0);
    Ok(())
}
