//! Leaflet marker map.
//!
//! The page is self-contained apart from the Leaflet assets and tiles, which
//! are loaded from their public CDNs. Marker data is embedded as JSON.

use crate::config::MapConfig;
use crate::constants::map::{LEAFLET_VERSION, MAX_ZOOM};
use crate::error::{Error, Result};
use crate::output::escape_html;
use crate::sighting::{Coordinates, Sighting};
use serde::Serialize;

/// One pin on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Marker latitude.
    pub latitude: f64,
    /// Marker longitude.
    pub longitude: f64,
    /// Popup text.
    pub popup: String,
}

impl Marker {
    /// Marker for a stored sighting, labelled with species and time.
    pub fn for_sighting(sighting: &Sighting) -> Self {
        Self {
            latitude: sighting.location.latitude,
            longitude: sighting.location.longitude,
            popup: format!(
                "{} ({})",
                sighting.species,
                sighting.observed_at.format("%Y-%m-%d %H:%M")
            ),
        }
    }
}

/// Map centred on the viewer with one marker per sighting.
#[derive(Debug, Clone)]
pub struct MapView {
    center: Coordinates,
    zoom: u8,
    tile_url: String,
    attribution: String,
    markers: Vec<Marker>,
}

impl MapView {
    /// Empty map centred on `center`, styled by `config`.
    pub fn new(center: Coordinates, config: &MapConfig) -> Self {
        Self {
            center,
            zoom: config.zoom,
            tile_url: config.tile_url.clone(),
            attribution: config.attribution.clone(),
            markers: Vec::new(),
        }
    }

    /// Add a marker for every sighting.
    #[must_use]
    pub fn with_sightings(mut self, sightings: &[Sighting]) -> Self {
        self.markers.extend(sightings.iter().map(Marker::for_sighting));
        self
    }

    /// Markers in insertion order.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Render a standalone HTML page.
    pub fn render_html(&self, title: &str) -> Result<String> {
        let markers = script_json(&self.markers)?;
        let tile_url = script_json(&self.tile_url)?;
        let attribution = script_json(&self.attribution)?;
        let title = escape_html(title);

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@{LEAFLET_VERSION}/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@{LEAFLET_VERSION}/dist/leaflet.js"></script>
<style>
html, body {{ height: 100%; margin: 0; font-family: sans-serif; }}
h1 {{ font-size: 1.2em; margin: 0.5em; }}
#map {{ height: calc(100% - 3em); }}
</style>
</head>
<body>
<h1>{title}</h1>
<div id="map"></div>
<script>
const map = L.map('map').setView([{lat:.6}, {lon:.6}], {zoom});
L.tileLayer({tile_url}, {{ maxZoom: {MAX_ZOOM}, attribution: {attribution} }}).addTo(map);
const markers = {markers};
for (const m of markers) {{
  L.marker([m.latitude, m.longitude]).bindPopup(m.popup).addTo(map);
}}
</script>
</body>
</html>
"#,
            lat = self.center.latitude,
            lon = self.center.longitude,
            zoom = self.zoom,
        ))
    }
}

/// Serialize a value for embedding inside a `<script>` element.
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value).map_err(|source| Error::JsonSerialize { source })?;
    Ok(json.replace("</", "<\\/"))
}
