//! Haversine distance.

use crate::constants::geo::EARTH_RADIUS_KM;
use crate::sighting::Coordinates;

/// Great-circle distance between two points in kilometres.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = lat1
        .cos()
        .mul_add(lat2.cos() * (dlon / 2.0).sin().powi(2), (dlat / 2.0).sin().powi(2));

    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}
