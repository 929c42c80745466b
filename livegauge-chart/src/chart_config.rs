// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The renderer construction object: chart type, geometry and data source.

use crate::{numeric, ChartAttributes, ChartType, ColorRange};
use livegauge_error::{LiveGaugeError, Result};
use serde::{Deserialize, Serialize};

/// One pointer of an angular gauge.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dial {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "numeric::opt_number", skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, deserialize_with = "numeric::opt_flag", skip_serializing_if = "Option::is_none")]
    pub show_value: Option<bool>,
    #[serde(default, alias = "toolText", skip_serializing_if = "Option::is_none")]
    pub tooltext: Option<String>,
    #[serde(default, deserialize_with = "numeric::opt_number", skip_serializing_if = "Option::is_none")]
    pub rear_extension: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dials {
    #[serde(default)]
    pub dial: Vec<Dial>,
}

/// The `dataSource` object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    #[serde(default)]
    pub chart: ChartAttributes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_range: Option<ColorRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dials: Option<Dials>,
    #[serde(default, deserialize_with = "numeric::opt_number", skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, deserialize_with = "numeric::opt_number", skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
}

impl DataSource {
    /// Value displayed before any update: `value`, else the first dial.
    pub fn initial_value(&self) -> Option<f64> {
        self.value.or_else(|| {
            self.dials
                .as_ref()
                .and_then(|dials| dials.dial.first())
                .and_then(|dial| dial.value)
        })
    }
}

/// Static configuration handed to a renderer at construction.
///
/// ```
/// use livegauge_chart::{ChartConfig, ChartType};
///
/// let config = ChartConfig::from_json_str(r#"{
///     "type": "hbullet",
///     "renderAt": "chart-container",
///     "width": "450",
///     "height": "53",
///     "dataFormat": "json",
///     "dataSource": { "chart": { "upperLimit": "12000" }, "value": "6954", "target": "10000" }
/// }"#).unwrap();
///
/// assert_eq!(config.chart_type, ChartType::HBullet);
/// assert_eq!(config.data_source.chart.upper_limit, Some(12000.0));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_at: Option<String>,
    #[serde(default, deserialize_with = "numeric::opt_number", skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, deserialize_with = "numeric::opt_number", skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default = "default_data_format")]
    pub data_format: String,
    #[serde(default)]
    pub data_source: DataSource,
}

fn default_data_format() -> String {
    "json".to_string()
}

impl ChartConfig {
    /// Parse and validate a renderer configuration.
    ///
    /// # Errors
    /// `ConfigParse` for malformed JSON, `InvalidConfig` if validation fails.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| LiveGaugeError::config_parse("json", err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn attributes(&self) -> &ChartAttributes {
        &self.data_source.chart
    }

    /// # Errors
    /// Returns `InvalidConfig` naming the first offending attribute.
    pub fn validate(&self) -> Result<()> {
        if !self.data_format.eq_ignore_ascii_case("json") {
            return Err(LiveGaugeError::invalid_config(
                "dataFormat",
                format!("unsupported format `{}`", self.data_format),
            ));
        }
        for (field, dimension) in [("width", self.width), ("height", self.height)] {
            if let Some(size) = dimension {
                if size <= 0.0 {
                    return Err(LiveGaugeError::invalid_config(
                        field,
                        format!("must be positive, got {size}"),
                    ));
                }
            }
        }

        let chart = &self.data_source.chart;
        if let (Some(lower), Some(upper)) = (chart.lower_limit, chart.upper_limit) {
            if lower >= upper {
                return Err(LiveGaugeError::invalid_config(
                    "chart.lowerLimit",
                    format!("{lower} must be below upperLimit {upper}"),
                ));
            }
        }
        if let Some(refresh) = chart.refresh_interval {
            if refresh <= 0.0 {
                return Err(LiveGaugeError::invalid_config(
                    "chart.refreshInterval",
                    format!("must be positive, got {refresh}"),
                ));
            }
        }
        if let Some(range) = &self.data_source.color_range {
            range.validate(chart.lower_limit, chart.upper_limit)?;
        }
        Ok(())
    }

    /// Integer start value for a live feed, if the chart declares one.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the declared value is fractional.
    pub fn initial_feed_value(&self) -> Result<Option<i64>> {
        self.data_source
            .initial_value()
            .map(|value| integer_field("dataSource.value", value))
            .transpose()
    }

    /// Integer target marker, if the chart declares one.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the declared target is fractional.
    pub fn target_feed_value(&self) -> Result<Option<i64>> {
        self.data_source
            .target
            .map(|value| integer_field("dataSource.target", value))
            .transpose()
    }
}

pub(crate) fn integer_field(field: &str, value: f64) -> Result<i64> {
    numeric::as_integer(value).ok_or_else(|| {
        LiveGaugeError::invalid_config(field, format!("{value} is not an integer"))
    })
}
