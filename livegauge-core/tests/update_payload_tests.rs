// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use livegauge_core::{LiveGaugeError, UpdatePayload};

#[test]
fn test_feed_string_without_target() {
    assert_eq!(UpdatePayload::new(78).to_feed_string(), "value=78");
}

#[test]
fn test_feed_string_with_target() {
    let payload = UpdatePayload::new(7351).with_target(10_000);
    assert_eq!(payload.to_string(), "value=7351&target=10000");
}

#[test]
fn test_parse_ignores_unknown_keys_and_order() -> anyhow::Result<()> {
    let payload: UpdatePayload = "label=Henry&target=10000&value=8120".parse()?;
    assert_eq!(payload, UpdatePayload::new(8120).with_target(10_000));
    Ok(())
}

#[test]
fn test_parse_rejects_missing_value() {
    let err = "target=10000".parse::<UpdatePayload>().unwrap_err();
    assert!(matches!(err, LiveGaugeError::InvalidPayload { .. }));
    assert!(err.to_string().contains("missing `value`"));
}

#[test]
fn test_parse_rejects_non_integer_value() {
    let err = "value=12.5".parse::<UpdatePayload>().unwrap_err();
    assert!(err.to_string().contains("`value` is not an integer"));
}

#[test]
fn test_parse_rejects_bare_key() {
    let err = "value".parse::<UpdatePayload>().unwrap_err();
    assert!(err.to_string().contains("not a key=value pair"));
}

#[test]
fn test_structured_payload_omits_missing_target() -> anyhow::Result<()> {
    let json = serde_json::to_string(&UpdatePayload::new(42))?;
    assert_eq!(json, r#"{"value":42}"#);

    let parsed: UpdatePayload = serde_json::from_str(r#"{"value":9001,"target":10000}"#)?;
    assert_eq!(parsed, UpdatePayload::new(9001).with_target(10_000));
    Ok(())
}
