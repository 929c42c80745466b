// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::numeric;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The `dataSource.chart` object.
///
/// Only attributes with meaning for a live feed are typed. Everything else
/// (fonts, margins, fill colors, tooltips) is kept in [`extra`](Self::extra)
/// and handed to the renderer as-is.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcaption: Option<String>,
    #[serde(default, deserialize_with = "numeric::opt_number", skip_serializing_if = "Option::is_none")]
    pub lower_limit: Option<f64>,
    #[serde(default, deserialize_with = "numeric::opt_number", skip_serializing_if = "Option::is_none")]
    pub upper_limit: Option<f64>,
    #[serde(default, deserialize_with = "numeric::opt_flag", skip_serializing_if = "Option::is_none")]
    pub show_value: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, alias = "numberprefix", skip_serializing_if = "Option::is_none")]
    pub number_prefix: Option<String>,
    #[serde(default, deserialize_with = "numeric::opt_number", skip_serializing_if = "Option::is_none")]
    pub decimals: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_stream_url: Option<String>,
    /// Seconds between polls of `dataStreamUrl`.
    #[serde(default, deserialize_with = "numeric::opt_number", skip_serializing_if = "Option::is_none")]
    pub refresh_interval: Option<f64>,
    #[serde(default, deserialize_with = "numeric::opt_flag", skip_serializing_if = "Option::is_none")]
    pub use_message_log: Option<bool>,
    #[serde(
        default,
        rename = "messageGoesToJS",
        deserialize_with = "numeric::opt_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub message_goes_to_js: Option<bool>,
    #[serde(default, rename = "messageJSHandler", skip_serializing_if = "Option::is_none")]
    pub message_js_handler: Option<String>,
    #[serde(
        default,
        rename = "messagePassAllToJS",
        deserialize_with = "numeric::opt_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub message_pass_all_to_js: Option<bool>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// External message-log feed a gauge polls on its own.
///
/// Described for completeness; livegauge never contacts the URL.
#[derive(Clone, Debug, PartialEq)]
pub struct StreamSettings {
    pub url: String,
    pub refresh_interval_secs: Option<f64>,
    pub use_message_log: bool,
    pub message_handler: Option<String>,
    pub pass_all_messages: bool,
}

impl ChartAttributes {
    /// Stream settings, if the chart names a `dataStreamUrl`.
    pub fn stream_settings(&self) -> Option<StreamSettings> {
        let url = self.data_stream_url.as_ref()?.trim();
        if url.is_empty() {
            return None;
        }
        let forwards = self.message_goes_to_js.unwrap_or(false);
        Some(StreamSettings {
            url: url.to_string(),
            refresh_interval_secs: self.refresh_interval,
            use_message_log: self.use_message_log.unwrap_or(false),
            message_handler: self
                .message_js_handler
                .clone()
                .filter(|_| forwards),
            pass_all_messages: forwards && self.message_pass_all_to_js.unwrap_or(false),
        })
    }

    /// Untyped attribute lookup, e.g. `attribute("plotFillColor")`.
    pub fn attribute(&self, name: &str) -> Option<&serde_json::Value> {
        self.extra.get(name)
    }
}
