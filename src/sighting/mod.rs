//! Sighting domain types.

mod species;
mod types;

pub use species::Species;
pub use types::{Coordinates, Sighting};
