//! Choose which sightings to show.

use crate::geo::haversine_km;
use crate::sighting::{Coordinates, Sighting};
use serde::{Deserialize, Serialize};

/// Which stored sightings of a species to display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Every stored location.
    #[default]
    All,
    /// The location closest to the viewer.
    Nearest,
    /// The most recently recorded location.
    Latest,
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Nearest => write!(f, "nearest"),
            Self::Latest => write!(f, "latest"),
        }
    }
}

/// Sighting closest to `viewer` by great-circle distance.
///
/// Linear scan; the first candidate wins on ties.
pub fn nearest(viewer: Coordinates, sightings: &[Sighting]) -> Option<&Sighting> {
    sightings
        .iter()
        .map(|s| (s, haversine_km(viewer, s.location)))
        .fold(None, |best: Option<(&Sighting, f64)>, (s, d)| match best {
            Some((_, b)) if d >= b => best,
            _ => Some((s, d)),
        })
        .map(|(s, _)| s)
}

/// Most recently observed sighting; the first one wins on equal timestamps.
pub fn latest(sightings: &[Sighting]) -> Option<&Sighting> {
    sightings.iter().fold(None, |best: Option<&Sighting>, s| match best {
        Some(b) if s.observed_at <= b.observed_at => best,
        _ => Some(s),
    })
}

/// Apply a display mode to a candidate set.
pub fn select(mode: DisplayMode, viewer: Coordinates, sightings: &[Sighting]) -> Vec<Sighting> {
    match mode {
        DisplayMode::All => sightings.to_vec(),
        DisplayMode::Nearest => nearest(viewer, sightings).cloned().into_iter().collect(),
        DisplayMode::Latest => latest(sightings).cloned().into_iter().collect(),
    }
}
