// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sample chart and session configurations.

use livegauge_chart::{ChartConfig, SessionConfig};
use livegauge_error::Result;

/// Real-time bullet graph: sales value walking towards a 10000 target.
pub const BULLET_GRAPH_JSON: &str = r##"{
    "type": "hbullet",
    "renderAt": "chart-container",
    "width": "450",
    "height": "53",
    "dataFormat": "json",
    "dataSource": {
        "chart": {
            "caption": "Henry",
            "subcaption": "Klein",
            "captionFontSize": "11.5",
            "animation": "1",
            "upperLimit": "12000",
            "showLimits": "0",
            "decimals": "2",
            "numberprefix": "$",
            "targetColor": "#444444",
            "plotFillColor": "#444444",
            "plotToolText": "<div>Sales : <b>$$value</b></div>",
            "theme": "zune"
        },
        "colorRange": {
            "color": [
                { "minValue": "0", "maxValue": "6000", "code": "#999498" },
                { "minValue": "6000", "maxValue": "9000", "code": "#c5c2c6" },
                { "minValue": "9000", "maxValue": "12000", "code": "#e1dee2" }
            ]
        },
        "value": "6954",
        "target": "10000"
    }
}"##;

/// Angular gauge polling an external message-log stream.
pub const ANGULAR_GAUGE_JSON: &str = r##"{
    "type": "angulargauge",
    "renderAt": "chart-container",
    "width": "400",
    "height": "300",
    "dataFormat": "json",
    "dataSource": {
        "chart": {
            "caption": "Server CPU Utilization",
            "subcaption": "forum.hsm.com",
            "lowerLimit": "0",
            "upperLimit": "100",
            "showValue": "1",
            "valueBelowPivot": "1",
            "tickValueDistance": "25",
            "theme": "fint",
            "dataStreamUrl": "http://static.fusioncharts.com/sampledata/php/streamMessagesToJS.php",
            "refreshInterval": "10",
            "useMessageLog": "1",
            "messageGoesToJS": "1",
            "messageJSHandler": "myFunction",
            "messagePassAllToJS": "1"
        },
        "colorRange": {
            "color": [
                { "minValue": "0", "maxValue": "50", "code": "#6baa01" },
                { "minValue": "50", "maxValue": "75", "code": "#f8bd19" },
                { "minValue": "75", "maxValue": "100", "code": "#e44a00" }
            ]
        },
        "dials": {
            "dial": [
                {
                    "id": "crntYr",
                    "value": "78",
                    "showValue": "1",
                    "tooltext": "Current year's average : $value",
                    "rearExtension": "15"
                }
            ]
        }
    }
}"##;

/// Bullet-graph session: the walk stops at 10970, below the 12000 chart ceiling.
pub const BULLET_GRAPH_SESSION_TOML: &str = r##"
[feed]
bound = 10970
step_max = 400
interval_ms = 25000
trigger = "rendered"

[chart]
type = "hbullet"
renderAt = "chart-container"
width = "450"
height = "53"
dataFormat = "json"

[chart.dataSource]
value = "6954"
target = "10000"

[chart.dataSource.chart]
caption = "Henry"
subcaption = "Klein"
upperLimit = "12000"
numberprefix = "$"
theme = "zune"

[[chart.dataSource.colorRange.color]]
minValue = "0"
maxValue = "6000"
code = "#999498"

[[chart.dataSource.colorRange.color]]
minValue = "6000"
maxValue = "9000"
code = "#c5c2c6"

[[chart.dataSource.colorRange.color]]
minValue = "9000"
maxValue = "12000"
code = "#e1dee2"
"##;

/// # Errors
/// Only if the embedded fixture is broken.
pub fn bullet_graph_config() -> Result<ChartConfig> {
    ChartConfig::from_json_str(BULLET_GRAPH_JSON)
}

/// # Errors
/// Only if the embedded fixture is broken.
pub fn angular_gauge_config() -> Result<ChartConfig> {
    ChartConfig::from_json_str(ANGULAR_GAUGE_JSON)
}

/// # Errors
/// Only if the embedded fixture is broken.
pub fn bullet_graph_session() -> Result<SessionConfig> {
    SessionConfig::from_toml_str(BULLET_GRAPH_SESSION_TOML)
}
