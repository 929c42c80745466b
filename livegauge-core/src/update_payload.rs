// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Values pushed to a live chart.

use core::fmt;
use core::str::FromStr;
use livegauge_error::LiveGaugeError;
use serde::{Deserialize, Serialize};

/// One update for a live chart: the plotted value and, for bullet graphs,
/// the target marker.
///
/// Two encodings are supported:
///
/// - the key-value feed string accepted by real-time charts
///   (`value=7200&target=10000`), via [`Display`](fmt::Display) and
///   [`FromStr`];
/// - a structured JSON object via serde, with `target` omitted when absent.
///
/// ```
/// use livegauge_core::UpdatePayload;
///
/// let payload = UpdatePayload::new(7200).with_target(10_000);
/// assert_eq!(payload.to_string(), "value=7200&target=10000");
/// assert_eq!("value=7200&target=10000".parse::<UpdatePayload>().unwrap(), payload);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpdatePayload {
    pub value: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<i64>,
}

impl UpdatePayload {
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            target: None,
        }
    }

    #[must_use]
    pub const fn with_target(mut self, target: i64) -> Self {
        self.target = Some(target);
        self
    }

    /// Key-value feed string.
    pub fn to_feed_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for UpdatePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value={}", self.value)?;
        if let Some(target) = self.target {
            write!(f, "&target={target}")?;
        }
        Ok(())
    }
}

impl FromStr for UpdatePayload {
    type Err = LiveGaugeError;

    /// Parse a feed string. Unknown keys are ignored; `value` is required.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let parse = |key: &str, raw: &str| {
            raw.trim().parse::<i64>().map_err(|_| {
                LiveGaugeError::invalid_payload(input, format!("`{key}` is not an integer: `{raw}`"))
            })
        };

        let mut value = None;
        let mut target = None;
        for pair in input.split('&').filter(|pair| !pair.is_empty()) {
            let (key, raw) = pair.split_once('=').ok_or_else(|| {
                LiveGaugeError::invalid_payload(input, format!("`{pair}` is not a key=value pair"))
            })?;
            match key.trim() {
                "value" => value = Some(parse("value", raw)?),
                "target" => target = Some(parse("target", raw)?),
                _ => {}
            }
        }

        let value = value.ok_or_else(|| LiveGaugeError::invalid_payload(input, "missing `value`"))?;
        Ok(Self { value, target })
    }
}
