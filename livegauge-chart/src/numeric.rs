// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Chart attributes arrive as strings (`"12000"`, `"1"`) as often as numbers.

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

pub(crate) fn opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Int(value)) => Ok(Some(value as f64)),
        Some(Raw::Float(value)) => Ok(Some(value)),
        Some(Raw::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Raw::Text(text)) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("`{text}` is not a number"))),
        Some(Raw::Bool(flag)) => Err(de::Error::custom(format!("expected a number, got `{flag}`"))),
    }
}

pub(crate) fn opt_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Bool(flag)) => Ok(Some(flag)),
        Some(Raw::Int(0)) => Ok(Some(false)),
        Some(Raw::Int(1)) => Ok(Some(true)),
        Some(Raw::Text(text)) => match text.trim() {
            "0" | "false" => Ok(Some(false)),
            "1" | "true" => Ok(Some(true)),
            other => Err(de::Error::custom(format!("`{other}` is not a 0/1 flag"))),
        },
        Some(Raw::Int(other)) => Err(de::Error::custom(format!("`{other}` is not a 0/1 flag"))),
        Some(Raw::Float(other)) => Err(de::Error::custom(format!("`{other}` is not a 0/1 flag"))),
    }
}

/// Convert a chart number to an integer feed value.
pub(crate) fn as_integer(value: f64) -> Option<i64> {
    (value.fract() == 0.0 && value.abs() < i64::MAX as f64).then_some(value as i64)
}
