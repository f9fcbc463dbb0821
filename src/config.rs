//! Radius defaults, slider bounds and map view constants.

use crate::Result;
use crate::diagnostics;

use anyhow::bail;

pub const DEFAULT_OUTPUT: &str = "index.html";

/// chrono format for the generation stamp, e.g. `19 Oct 2026  08:30 UTC`.
pub const TIMESTAMP_FORMAT: &str = "%d %b %Y  %H:%M UTC";

pub const INNER_RADIUS_KM: f64 = 5.0;
pub const OUTER_RADIUS_KM: f64 = 12.0;
pub const AWARE_RADIUS_KM: f64 = 22.0;

/// Initial map view.
pub const MAP_CENTER: (f64, f64) = (25.05, 55.15);
pub const MAP_ZOOM: u8 = 10;
/// Zoom used when a sidebar entry is clicked.
pub const FLY_TO_ZOOM: u8 = 12;

/// Range input bounds for one radius slider, in km.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

pub const INNER_SLIDER: SliderBounds = SliderBounds {
    min: 1.0,
    max: 25.0,
    step: 0.5,
};
pub const OUTER_SLIDER: SliderBounds = SliderBounds {
    min: 2.0,
    max: 40.0,
    step: 0.5,
};
pub const AWARE_SLIDER: SliderBounds = SliderBounds {
    min: 5.0,
    max: 60.0,
    step: 1.0,
};

/// The three avoidance radii, in kilometers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusConfig {
    pub inner_km: f64,
    pub outer_km: f64,
    pub aware_km: f64,
}

impl Default for RadiusConfig {
    fn default() -> Self {
        Self {
            inner_km: INNER_RADIUS_KM,
            outer_km: OUTER_RADIUS_KM,
            aware_km: AWARE_RADIUS_KM,
        }
    }
}

impl RadiusConfig {
    /// Radii in meters, as Leaflet circles expect them.
    pub fn meters(&self) -> [f64; 3] {
        [
            self.inner_km * 1000.0,
            self.outer_km * 1000.0,
            self.aware_km * 1000.0,
        ]
    }

    /// Each radius must sit inside its slider's range. Misordered radii only warn.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("inner", self.inner_km, INNER_SLIDER),
            ("outer", self.outer_km, OUTER_SLIDER),
            ("awareness", self.aware_km, AWARE_SLIDER),
        ];
        for (label, km, bounds) in checks {
            if !km.is_finite() || km < bounds.min || km > bounds.max {
                bail!(
                    "{}",
                    diagnostics::error_message(format!(
                        "{} radius {} km is outside slider range {}..={} km",
                        label, km, bounds.min, bounds.max
                    ))
                );
            }
        }

        if !(self.inner_km <= self.outer_km && self.outer_km <= self.aware_km) {
            diagnostics::warn(format!(
                "radii are not nested (inner {} km, outer {} km, awareness {} km)",
                self.inner_km, self.outer_km, self.aware_km
            ));
        }
        Ok(())
    }
}
