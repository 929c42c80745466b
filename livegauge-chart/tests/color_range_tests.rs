// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use livegauge_chart::{ColorBand, ColorRange};
use livegauge_core::LiveGaugeError;
use livegauge_test_utils::fixtures::bullet_graph_config;

fn sales_bands() -> ColorRange {
    ColorRange::new(vec![
        ColorBand::new(0.0, 6000.0, "#999498"),
        ColorBand::new(6000.0, 9000.0, "#c5c2c6"),
        ColorBand::new(9000.0, 12_000.0, "#e1dee2"),
    ])
}

fn rejected_field(range: &ColorRange, lower: Option<f64>, upper: Option<f64>) -> String {
    match range.validate(lower, upper) {
        Err(LiveGaugeError::InvalidConfig { field, .. }) => field,
        other => panic!("expected InvalidConfig, got {other:?}"),
    }
}

#[test]
fn test_fixture_bands_match_sales_bands() -> anyhow::Result<()> {
    let config = bullet_graph_config()?;

    assert_eq!(config.data_source.color_range, Some(sales_bands()));
    Ok(())
}

#[test]
fn test_color_for_uses_half_open_bands() {
    let range = sales_bands();

    assert_eq!(range.color_for(0.0), Some("#999498"));
    assert_eq!(range.color_for(5999.99), Some("#999498"));
    assert_eq!(range.color_for(6000.0), Some("#c5c2c6"));
    assert_eq!(range.color_for(6954.0), Some("#c5c2c6"));
    assert_eq!(range.color_for(10_970.0), Some("#e1dee2"));
}

#[test]
fn test_last_band_includes_its_maximum() {
    let range = sales_bands();

    assert_eq!(range.color_for(12_000.0), Some("#e1dee2"));
    assert_eq!(range.color_for(12_000.5), None);
    assert_eq!(range.color_for(-1.0), None);
}

#[test]
fn test_empty_range_has_no_color() {
    let range = ColorRange::default();

    assert!(range.validate(Some(0.0), Some(100.0)).is_ok());
    assert_eq!(range.color_for(50.0), None);
}

#[test]
fn test_overlapping_bands_are_rejected() {
    let range = ColorRange::new(vec![
        ColorBand::new(0.0, 60.0, "#6baa01"),
        ColorBand::new(50.0, 100.0, "#e44a00"),
    ]);

    assert_eq!(rejected_field(&range, None, None), "colorRange.color[1]");
}

#[test]
fn test_gap_between_bands_is_rejected() {
    let range = ColorRange::new(vec![
        ColorBand::new(0.0, 40.0, "#6baa01"),
        ColorBand::new(50.0, 100.0, "#e44a00"),
    ]);

    assert_eq!(rejected_field(&range, None, None), "colorRange.color[1]");
}

#[test]
fn test_empty_band_is_rejected() {
    let range = ColorRange::new(vec![ColorBand::new(10.0, 10.0, "#6baa01")]);

    assert_eq!(rejected_field(&range, None, None), "colorRange.color[0]");
}

#[test]
fn test_blank_code_is_rejected() {
    let range = ColorRange::new(vec![
        ColorBand::new(0.0, 50.0, "#6baa01"),
        ColorBand::new(50.0, 100.0, "  "),
    ]);

    assert_eq!(rejected_field(&range, None, None), "colorRange.color[1]");
}

#[test]
fn test_bands_must_stay_within_chart_limits() {
    let range = sales_bands();

    assert_eq!(rejected_field(&range, Some(100.0), None), "colorRange.color[0]");
    assert_eq!(rejected_field(&range, None, Some(10_970.0)), "colorRange.color[2]");
    assert!(range.validate(Some(0.0), Some(12_000.0)).is_ok());
}
