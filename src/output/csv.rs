//! CSV output.

use crate::error::{Error, Result};
use crate::output::SightingRow;

/// CSV table of rows with a header line.
pub fn render_csv(rows: &[SightingRow]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if rows.is_empty() {
        writer
            .write_record(["species", "latitude", "longitude", "observed_at", "distance_km"])
            .map_err(|source| Error::CsvWrite { source })?;
    }
    for row in rows {
        writer
            .serialize(row)
            .map_err(|source| Error::CsvWrite { source })?;
    }

    let bytes = writer.into_inner().map_err(|e| Error::Internal {
        message: format!("failed to flush CSV buffer: {}", e.error()),
    })?;
    String::from_utf8(bytes).map_err(|e| Error::Internal {
        message: format!("CSV output is not UTF-8: {e}"),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::sighting::Species;

    fn row(species: Species, latitude: f64, longitude: f64) -> SightingRow {
        SightingRow {
            species,
            latitude,
            longitude,
            observed_at: "2024-02-29 18:45:00".to_string(),
            distance_km: 12.5,
        }
    }

    #[test]
    fn test_csv_has_header_and_every_row() {
        let rows = vec![
            row(Species::StripedRedMullet, 36.9, 30.7),
            row(Species::StripedRedMullet, 38.4, 27.1),
        ];
        let text = render_csv(&rows).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "species,latitude,longitude,observed_at,distance_km");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Striped Red Mullet,36.9,30.7,2024-02-29 18:45:00,12.5");
    }

    #[test]
    fn test_empty_csv_still_has_header() {
        let text = render_csv(&[]).unwrap();
        assert_eq!(text, "species,latitude,longitude,observed_at,distance_km\n");
    }

    #[test]
    fn test_labels_with_commas_are_quoted() {
        let mut r = row(Species::Shrimp, 0.0, 0.0);
        r.observed_at = "a,b".to_string();
        let text = render_csv(&[r]).unwrap();
        assert!(text.contains("\"a,b\""));
    }
}
