// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::{Deserialize, Serialize};

/// Widget kinds a live session can drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    AngularGauge,
    HBullet,
    VBullet,
    HLinearGauge,
    Thermometer,
    Cylinder,
    Bulb,
    HLed,
    VLed,
    RealTimeLine,
    /// Any other renderer type; passed through untouched.
    #[serde(other)]
    Other,
}

impl ChartType {
    /// Bullet graphs plot a target marker next to the value.
    pub const fn supports_target(self) -> bool {
        matches!(self, Self::HBullet | Self::VBullet)
    }

    /// Single-value widgets that expose a dial or pointer.
    pub const fn is_gauge(self) -> bool {
        matches!(
            self,
            Self::AngularGauge
                | Self::HLinearGauge
                | Self::Thermometer
                | Self::Cylinder
                | Self::Bulb
                | Self::HLed
                | Self::VLed
        )
    }
}
