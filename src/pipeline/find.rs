//! Sighting lookup for one species.

use crate::error::Result;
use crate::geo::{DisplayMode, select};
use crate::sighting::{Coordinates, Sighting, Species};
use crate::store::SightingStore;
use tracing::{info, warn};

/// What a find query produced.
#[derive(Debug, Clone, PartialEq)]
pub enum FindOutcome {
    /// No stored sightings of the species.
    NoLocations,
    /// Stored sightings exist; `selected` is what the display mode kept.
    Found {
        /// Number of stored sightings of the species.
        all_count: usize,
        /// Sightings to display.
        selected: Vec<Sighting>,
    },
}

/// Query stored sightings of `species` and apply `mode` relative to `viewer`.
///
/// An empty result is a warning, not an error.
pub async fn find_sightings(
    species: Species,
    mode: DisplayMode,
    viewer: Coordinates,
    store: &SightingStore,
) -> Result<FindOutcome> {
    let all = store.by_species(species).await?;

    if all.is_empty() {
        warn!("No locations found for {species}");
        return Ok(FindOutcome::NoLocations);
    }

    let selected = select(mode, viewer, &all);
    info!(
        "Showing {} of {} {} sighting(s) ({mode})",
        selected.len(),
        all.len(),
        species
    );

    Ok(FindOutcome::Found {
        all_count: all.len(),
        selected,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    async fn seeded_store() -> SightingStore {
        let store = SightingStore::connect_url("sqlite::memory:").await.unwrap();
        store.ensure_schema().await.unwrap();
        for (lat, lon, day) in [(41.0151, 28.9795, 1), (39.9334, 32.8597, 20), (40.1826, 29.0665, 5)] {
            let when = NaiveDate::from_ymd_opt(2024, 4, day)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap();
            store
                .insert(&Sighting::new(
                    Species::HorseMackerel,
                    Coordinates::new(lat, lon).unwrap(),
                    when,
                ))
                .await
                .unwrap();
        }
        store
    }

    fn istanbul() -> Coordinates {
        Coordinates::new(41.0082, 28.9784).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_species_yields_no_locations() {
        let store = seeded_store().await;
        let outcome = find_sightings(Species::Trout, DisplayMode::All, istanbul(), &store)
            .await
            .unwrap();
        assert_eq!(outcome, FindOutcome::NoLocations);
    }

    #[tokio::test]
    async fn test_all_mode_keeps_everything() {
        let store = seeded_store().await;
        let outcome = find_sightings(Species::HorseMackerel, DisplayMode::All, istanbul(), &store)
            .await
            .unwrap();
        match outcome {
            FindOutcome::Found {
                all_count,
                selected,
            } => {
                assert_eq!(all_count, 3);
                assert_eq!(selected.len(), 3);
            }
            FindOutcome::NoLocations => panic!("expected sightings"),
        }
    }

    #[tokio::test]
    async fn test_nearest_and_latest() {
        let store = seeded_store().await;

        let nearest = find_sightings(Species::HorseMackerel, DisplayMode::Nearest, istanbul(), &store)
            .await
            .unwrap();
        let FindOutcome::Found { selected, .. } = nearest else {
            panic!("expected sightings");
        };
        assert_eq!(selected.len(), 1);
        assert!((selected[0].location.latitude - 41.0151).abs() < 1e-9);

        let latest = find_sightings(Species::HorseMackerel, DisplayMode::Latest, istanbul(), &store)
            .await
            .unwrap();
        let FindOutcome::Found { selected, .. } = latest else {
            panic!("expected sightings");
        };
        assert_eq!(selected.len(), 1);
        assert!((selected[0].location.latitude - 39.9334).abs() < 1e-9);
    }
}
