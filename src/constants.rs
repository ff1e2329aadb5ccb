//! Application-wide constants.
//!
//! Model input geometry, database defaults and map settings live here so the
//! CLI, config defaults and validation agree on them.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "fishfind";

/// Model input constants.
pub mod model {
    /// Side length of the square image the classifier expects.
    pub const INPUT_SIZE: u32 = 224;

    /// Number of colour channels fed to the classifier (RGB).
    pub const CHANNELS: usize = 3;

    /// Divisor that maps 8-bit channel values into `[0, 1]`.
    pub const PIXEL_SCALE: f32 = 255.0;

    /// Smallest accepted `model.input_size` override.
    pub const MIN_INPUT_SIZE: u32 = 16;

    /// Largest accepted `model.input_size` override.
    pub const MAX_INPUT_SIZE: u32 = 1024;

    /// Default model file name, resolved relative to the working directory.
    pub const DEFAULT_MODEL_FILE: &str = "fishModel.onnx";
}

/// Image file extensions accepted on upload and shown in the gallery.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp"];

/// Database constants.
pub mod database {
    /// Name of the sightings table.
    pub const TABLE: &str = "fish_location";

    /// Default database host.
    pub const DEFAULT_HOST: &str = "localhost";

    /// Default MySQL port.
    pub const DEFAULT_PORT: u16 = 3306;

    /// Default database user.
    pub const DEFAULT_USER: &str = "root";

    /// Default database name.
    pub const DEFAULT_NAME: &str = "fishdetection";

    /// Text format of the `timestamp` column.
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

/// Geographic constants.
pub mod geo {
    /// Mean Earth radius in kilometres (IUGG).
    pub const EARTH_RADIUS_KM: f64 = 6371.0088;

    /// Valid latitude range in degrees.
    pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

    /// Valid longitude range in degrees.
    pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;
}

/// Map rendering constants.
pub mod map {
    /// Default zoom level, city scale.
    pub const DEFAULT_ZOOM: u8 = 12;

    /// Maximum zoom supported by standard tile servers.
    pub const MAX_ZOOM: u8 = 19;

    /// Default tile URL template.
    pub const DEFAULT_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

    /// Default tile attribution.
    pub const DEFAULT_ATTRIBUTION: &str =
        "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

    /// Leaflet version loaded by rendered pages.
    pub const LEAFLET_VERSION: &str = "1.9.4";

    /// Default output file for rendered maps.
    pub const DEFAULT_OUTPUT: &str = "fish_map.html";
}

/// Home page gallery constants.
pub mod gallery {
    /// Default folder scanned for showcase images.
    pub const DEFAULT_DIR: &str = "images";

    /// Default number of grid columns.
    pub const DEFAULT_COLUMNS: usize = 3;

    /// Default output file for the gallery page.
    pub const DEFAULT_OUTPUT: &str = "gallery.html";
}
