//! Great-circle distance and sighting selection.

mod distance;
mod select;

pub use distance::haversine_km;
pub use select::{DisplayMode, latest, nearest, select};
