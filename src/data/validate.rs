//! Loading and validating a location table before it reaches the renderer.

use super::record::LocationRecord;
use crate::Result;
use crate::diagnostics;

use anyhow::{Context, bail};
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;

const COLOR_RE: &str = r"^#[0-9a-fA-F]{6}$";

/// A table that passed [`validate`]. Order is preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedLocations {
    pub records: Vec<LocationRecord>,
}

/// Read a JSON array of location records.
pub fn load_locations(path: &str) -> Result<Vec<LocationRecord>> {
    let text = fs::read_to_string(path)
        .with_context(|| diagnostics::error_message(format!("read locations file {}", path)))?;
    let records: Vec<LocationRecord> = serde_json::from_str(&text)
        .with_context(|| diagnostics::error_message(format!("parse locations file {}", path)))?;
    Ok(records)
}

/// Check names, coordinates and colors.
///
/// Names must be unique: the page keys each location's circles by name.
/// An empty table is allowed but warned about.
pub fn validate(records: Vec<LocationRecord>) -> Result<ValidatedLocations> {
    let color_re = Regex::new(COLOR_RE)?;
    let mut seen: BTreeSet<&str> = BTreeSet::new();

    for (idx, rec) in records.iter().enumerate() {
        if rec.name.trim().is_empty() {
            bail!(
                "{}",
                diagnostics::error_message(format!("location #{} has an empty name", idx))
            );
        }
        if !seen.insert(rec.name.as_str()) {
            bail!(
                "{}",
                diagnostics::error_message(format!("duplicate location name: {}", rec.name))
            );
        }
        if !rec.lat.is_finite() || !(-90.0..=90.0).contains(&rec.lat) {
            bail!(
                "{}",
                diagnostics::error_message(format!(
                    "location '{}' has latitude out of range: {}",
                    rec.name, rec.lat
                ))
            );
        }
        if !rec.lng.is_finite() || !(-180.0..=180.0).contains(&rec.lng) {
            bail!(
                "{}",
                diagnostics::error_message(format!(
                    "location '{}' has longitude out of range: {}",
                    rec.name, rec.lng
                ))
            );
        }
        if !color_re.is_match(&rec.color) {
            bail!(
                "{}",
                diagnostics::error_message(format!(
                    "location '{}' has invalid color {:?} (expected #rrggbb)",
                    rec.name, rec.color
                ))
            );
        }
    }

    if records.is_empty() {
        diagnostics::warn("location table is empty; the map will have no markers");
    }

    Ok(ValidatedLocations { records })
}
