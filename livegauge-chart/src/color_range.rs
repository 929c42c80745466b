// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Threshold bands coloring a gauge scale.

use crate::numeric;
use livegauge_error::{LiveGaugeError, Result};
use serde::{Deserialize, Serialize};

/// One `{minValue, maxValue, code}` band.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorBand {
    #[serde(deserialize_with = "required_number")]
    pub min_value: f64,
    #[serde(deserialize_with = "required_number")]
    pub max_value: f64,
    pub code: String,
}

fn required_number<'de, D>(deserializer: D) -> core::result::Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    numeric::opt_number(deserializer)?
        .ok_or_else(|| serde::de::Error::custom("band limit must not be empty"))
}

impl ColorBand {
    pub fn new(min_value: f64, max_value: f64, code: impl Into<String>) -> Self {
        Self {
            min_value,
            max_value,
            code: code.into(),
        }
    }
}

/// Ordered, contiguous set of color bands.
///
/// ```
/// use livegauge_chart::{ColorBand, ColorRange};
///
/// let range = ColorRange::new(vec![
///     ColorBand::new(0.0, 50.0, "#6baa01"),
///     ColorBand::new(50.0, 75.0, "#f8bd19"),
///     ColorBand::new(75.0, 100.0, "#e44a00"),
/// ]);
/// range.validate(Some(0.0), Some(100.0)).unwrap();
/// assert_eq!(range.color_for(78.0), Some("#e44a00"));
/// assert_eq!(range.color_for(50.0), Some("#f8bd19"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorRange {
    #[serde(default)]
    pub color: Vec<ColorBand>,
}

impl ColorRange {
    pub fn new(color: Vec<ColorBand>) -> Self {
        Self { color }
    }

    pub fn bands(&self) -> &[ColorBand] {
        &self.color
    }

    /// Check that bands are well formed, ordered, non-overlapping and contiguous,
    /// and stay inside the chart limits when those are known.
    ///
    /// # Errors
    /// Returns `InvalidConfig` for the first offending band.
    pub fn validate(&self, lower_limit: Option<f64>, upper_limit: Option<f64>) -> Result<()> {
        for (index, band) in self.color.iter().enumerate() {
            let field = format!("colorRange.color[{index}]");
            if band.code.trim().is_empty() {
                return Err(LiveGaugeError::invalid_config(field, "color code is empty"));
            }
            if band.min_value >= band.max_value {
                return Err(LiveGaugeError::invalid_config(
                    field,
                    format!(
                        "minValue {} must be below maxValue {}",
                        band.min_value, band.max_value
                    ),
                ));
            }
        }

        for (index, pair) in self.color.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            let field = format!("colorRange.color[{}]", index + 1);
            if next.min_value < prev.max_value {
                return Err(LiveGaugeError::invalid_config(
                    field,
                    format!(
                        "overlaps previous band ending at {}",
                        prev.max_value
                    ),
                ));
            }
            if next.min_value > prev.max_value {
                return Err(LiveGaugeError::invalid_config(
                    field,
                    format!(
                        "leaves a gap between {} and {}",
                        prev.max_value, next.min_value
                    ),
                ));
            }
        }

        if let (Some(lower), Some(first)) = (lower_limit, self.color.first()) {
            if first.min_value < lower {
                return Err(LiveGaugeError::invalid_config(
                    "colorRange.color[0]",
                    format!("starts below lowerLimit {lower}"),
                ));
            }
        }
        if let (Some(upper), Some(last)) = (upper_limit, self.color.last()) {
            if last.max_value > upper {
                return Err(LiveGaugeError::invalid_config(
                    format!("colorRange.color[{}]", self.color.len() - 1),
                    format!("ends above upperLimit {upper}"),
                ));
            }
        }
        Ok(())
    }

    /// Code of the band containing `value`.
    ///
    /// Bands are half-open (`min <= v < max`) except the last, which also
    /// contains its `maxValue`.
    pub fn color_for(&self, value: f64) -> Option<&str> {
        let last = self.color.len().checked_sub(1)?;
        self.color
            .iter()
            .enumerate()
            .find(|(index, band)| {
                value >= band.min_value
                    && (value < band.max_value || (*index == last && value == band.max_value))
            })
            .map(|(_, band)| band.code.as_str())
    }
}
