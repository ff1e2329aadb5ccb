//! Configuration type definitions.

use crate::constants::{database, gallery, map, model};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Database connection settings.
    pub database: DatabaseConfig,

    /// Classifier model settings.
    pub model: ModelConfig,

    /// Inference settings.
    pub inference: InferenceConfig,

    /// Default settings.
    pub defaults: DefaultsConfig,

    /// Map rendering settings.
    pub map: MapConfig,
}

/// Database connection settings.
///
/// `url` takes precedence over the individual fields when set.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Full connection URL (e.g. `sqlite://fish.db` or `mysql://...`).
    pub url: Option<String>,

    /// Database host.
    pub host: String,

    /// Database port.
    pub port: u16,

    /// Database user.
    pub user: String,

    /// Database password.
    pub password: String,

    /// Database name.
    pub database: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: database::DEFAULT_HOST.to_string(),
            port: database::DEFAULT_PORT,
            user: database::DEFAULT_USER.to_string(),
            password: String::new(),
            database: database::DEFAULT_NAME.to_string(),
        }
    }
}

impl DatabaseConfig {
    /// Connection URL for this configuration.
    ///
    /// User and password are percent-encoded.
    pub fn connection_url(&self) -> String {
        if let Some(url) = &self.url {
            return url.clone();
        }

        let credentials = if self.password.is_empty() {
            urlencoding::encode(&self.user).into_owned()
        } else {
            format!(
                "{}:{}",
                urlencoding::encode(&self.user),
                urlencoding::encode(&self.password)
            )
        };

        format!(
            "mysql://{credentials}@{}:{}/{}",
            self.host, self.port, self.database
        )
    }
}

// Keep the password out of `config show` and debug logs.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "<set>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &if self.password.is_empty() { "" } else { "***" })
            .field("database", &self.database)
            .finish()
    }
}

/// Classifier model settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to the ONNX model file.
    pub path: PathBuf,

    /// Square input size in pixels.
    pub input_size: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(model::DEFAULT_MODEL_FILE),
            input_size: model::INPUT_SIZE,
        }
    }
}

/// Inference device configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InferenceDevice {
    /// Automatically select (GPU if available, else CPU).
    #[default]
    Auto,
    /// Request GPU (CUDA), fall back to CPU with a warning.
    Gpu,
    /// Force CPU inference.
    Cpu,
}

impl std::fmt::Display for InferenceDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Gpu => write!(f, "gpu"),
            Self::Cpu => write!(f, "cpu"),
        }
    }
}

/// Inference settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Device to use for inference.
    pub device: InferenceDevice,
}

/// Default settings used when flags are omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Viewer latitude.
    pub latitude: Option<f64>,

    /// Viewer longitude.
    pub longitude: Option<f64>,

    /// Folder shown by the `gallery` command.
    pub images_dir: PathBuf,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            latitude: None,
            longitude: None,
            images_dir: PathBuf::from(gallery::DEFAULT_DIR),
        }
    }
}

/// Map rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Initial zoom level.
    pub zoom: u8,

    /// Tile URL template.
    pub tile_url: String,

    /// Tile attribution HTML.
    pub attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom: map::DEFAULT_ZOOM,
            tile_url: map::DEFAULT_TILE_URL.to_string(),
            attribution: map::DEFAULT_ATTRIBUTION.to_string(),
        }
    }
}

/// Output formats for `find`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Leaflet marker map (HTML).
    #[default]
    Map,
    /// JSON report.
    Json,
    /// CSV table.
    Csv,
}

impl OutputFormat {
    /// Default output file name for this format.
    pub const fn default_file_name(self) -> &'static str {
        match self {
            Self::Map => map::DEFAULT_OUTPUT,
            Self::Json => "fish_sightings.json",
            Self::Csv => "fish_sightings.csv",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Map => write!(f, "map"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "map" | "html" => Ok(Self::Map),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}
