//! Relational persistence for sightings.

mod sightings;

pub use sightings::{SightingStore, format_timestamp, parse_timestamp};
