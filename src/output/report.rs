//! Rows describing a set of selected sightings.

use crate::geo::{DisplayMode, haversine_km};
use crate::sighting::{Coordinates, Sighting, Species};
use crate::store::format_timestamp;
use serde::Serialize;

/// One selected sighting, flattened for tabular output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SightingRow {
    /// Species label.
    pub species: Species,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Observation time, `YYYY-MM-DD HH:MM:SS`.
    pub observed_at: String,
    /// Great-circle distance from the viewer in kilometres.
    pub distance_km: f64,
}

impl SightingRow {
    /// Row for `sighting` as seen from `viewer`.
    pub fn new(sighting: &Sighting, viewer: Coordinates) -> Self {
        Self {
            species: sighting.species,
            latitude: sighting.location.latitude,
            longitude: sighting.location.longitude,
            observed_at: format_timestamp(sighting.observed_at),
            distance_km: round_km(haversine_km(viewer, sighting.location)),
        }
    }
}

/// Result of a find query as written to JSON.
#[derive(Debug, Clone, Serialize)]
pub struct SightingReport {
    /// Species searched for.
    pub species: Species,
    /// Display mode applied.
    pub mode: DisplayMode,
    /// Viewer location.
    pub viewer: Coordinates,
    /// Number of stored sightings before selection.
    pub total_stored: usize,
    /// Selected sightings.
    pub sightings: Vec<SightingRow>,
}

impl SightingReport {
    /// Build a report from the selected sightings.
    pub fn new(
        species: Species,
        mode: DisplayMode,
        viewer: Coordinates,
        total_stored: usize,
        selected: &[Sighting],
    ) -> Self {
        Self {
            species,
            mode,
            viewer,
            total_stored,
            sightings: selected
                .iter()
                .map(|s| SightingRow::new(s, viewer))
                .collect(),
        }
    }
}

/// Round to metre precision.
fn round_km(km: f64) -> f64 {
    (km * 1000.0).round() / 1000.0
}
