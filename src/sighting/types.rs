//! Sighting and location types.

use crate::config::validate_coordinates;
use crate::error::Result;
use crate::sighting::Species;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude (-90.0 to 90.0).
    pub latitude: f64,
    /// Longitude (-180.0 to 180.0).
    pub longitude: f64,
}

impl Coordinates {
    /// Create validated coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        validate_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// One recorded observation of a species at a place and time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sighting {
    /// Classified species.
    pub species: Species,
    /// Where the photo was uploaded from.
    pub location: Coordinates,
    /// Local wall-clock time of the upload, second precision.
    pub observed_at: NaiveDateTime,
}

impl Sighting {
    /// Create a sighting.
    pub fn new(species: Species, location: Coordinates, observed_at: NaiveDateTime) -> Self {
        Self {
            species,
            location,
            observed_at,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_coordinates_valid() {
        let c = Coordinates::new(41.0082, 28.9784).unwrap();
        assert!((c.latitude - 41.0082).abs() < f64::EPSILON);
    }

    #[test]
    fn test_coordinates_out_of_range() {
        assert!(matches!(
            Coordinates::new(95.0, 0.0),
            Err(Error::InvalidLatitude { .. })
        ));
        assert!(matches!(
            Coordinates::new(0.0, -181.0),
            Err(Error::InvalidLongitude { .. })
        ));
    }

    #[test]
    fn test_coordinates_display() {
        let c = Coordinates::new(1.5, -2.25).unwrap();
        assert_eq!(c.to_string(), "(1.500000, -2.250000)");
    }
}
