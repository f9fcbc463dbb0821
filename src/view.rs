//! View model: everything the page template needs, in one value.

use crate::config::{
    self, AWARE_SLIDER, INNER_SLIDER, OUTER_SLIDER, RadiusConfig, SliderBounds,
};
use crate::data::{LocationRecord, RiskTier, ValidatedLocations};

#[derive(Debug, Clone)]
pub struct SliderView {
    /// 1, 2 or 3; matches the `r{n}` element ids and circle groups.
    pub index: u8,
    pub label: &'static str,
    pub km: f64,
    pub meters: f64,
    pub bounds: SliderBounds,
}

#[derive(Debug, Clone)]
pub struct TierCounts {
    pub critical: usize,
    pub high: usize,
    pub incident: usize,
}

#[derive(Debug, Clone)]
pub struct MapView {
    pub locations: Vec<LocationRecord>,
    pub sliders: [SliderView; 3],
    pub center: (f64, f64),
    pub zoom: u8,
    pub fly_to_zoom: u8,
    pub generated_at: String,
    pub contact_url: Option<String>,
    pub counts: TierCounts,
}

/// Assemble the page payload. Pure; the timestamp is passed in.
pub fn build_map_view(
    locations: &ValidatedLocations,
    radii: &RadiusConfig,
    generated_at: &str,
    contact_url: Option<&str>,
) -> MapView {
    let [inner_m, outer_m, aware_m] = radii.meters();

    let mut counts = TierCounts {
        critical: 0,
        high: 0,
        incident: 0,
    };
    for rec in &locations.records {
        match rec.risk {
            RiskTier::Critical => counts.critical += 1,
            RiskTier::High => counts.high += 1,
            RiskTier::Incident => counts.incident += 1,
        }
    }

    MapView {
        locations: locations.records.clone(),
        sliders: [
            SliderView {
                index: 1,
                label: "Inner Exclusion",
                km: radii.inner_km,
                meters: inner_m,
                bounds: INNER_SLIDER,
            },
            SliderView {
                index: 2,
                label: "Caution Zone",
                km: radii.outer_km,
                meters: outer_m,
                bounds: OUTER_SLIDER,
            },
            SliderView {
                index: 3,
                label: "Awareness Zone",
                km: radii.aware_km,
                meters: aware_m,
                bounds: AWARE_SLIDER,
            },
        ],
        center: config::MAP_CENTER,
        zoom: config::MAP_ZOOM,
        fly_to_zoom: config::FLY_TO_ZOOM,
        generated_at: generated_at.to_string(),
        contact_url: contact_url.map(str::to_string),
        counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{builtin, validate};

    #[test]
    fn counts_tiers_and_carries_radii() {
        let locs = validate(builtin()).unwrap();
        let radii = RadiusConfig {
            inner_km: 3.5,
            outer_km: 12.0,
            aware_km: 30.0,
        };
        let v = build_map_view(&locs, &radii, "01 Jan 2026  00:00 UTC", None);

        assert_eq!(v.counts.critical, 2);
        assert_eq!(v.counts.high, 1);
        assert_eq!(v.counts.incident, 1);
        assert_eq!(v.sliders[0].meters, 3500.0);
        assert_eq!(v.sliders[2].km, 30.0);
        assert_eq!(v.locations, builtin());
        assert!(v.contact_url.is_none());
    }
}
