//! Error types for fishfind.

/// Result type alias for fishfind operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for fishfind.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// No image was supplied or the path does not exist.
    #[error("image not found: {path} (please upload an image)")]
    ImageNotFound {
        /// Path that was given.
        path: std::path::PathBuf,
    },

    /// Image extension is not one of the accepted formats.
    #[error("unsupported image format: {path} (expected jpg, jpeg, png, gif or bmp)")]
    UnsupportedImageFormat {
        /// Path to the rejected file.
        path: std::path::PathBuf,
    },

    /// Failed to decode image.
    #[error("failed to decode image '{path}'")]
    ImageDecode {
        /// Path to the image file.
        path: std::path::PathBuf,
        /// Underlying decoder error.
        #[source]
        source: image::ImageError,
    },

    /// Model file does not exist.
    #[error("model file does not exist: {path}")]
    ModelFileNotFound {
        /// Path to the missing model file.
        path: std::path::PathBuf,
    },

    /// Failed to build classifier.
    #[error("failed to build classifier: {reason}")]
    ClassifierBuild {
        /// Description of the build failure.
        reason: String,
    },

    /// Inference failed.
    #[error("inference failed: {reason}")]
    Inference {
        /// Description of the inference failure.
        reason: String,
    },

    /// Model produced a score vector that cannot be mapped onto the label list.
    #[error("model returned {actual} scores, expected {expected}")]
    UnexpectedOutputShape {
        /// Number of known labels.
        expected: usize,
        /// Number of scores returned.
        actual: usize,
    },

    /// Unknown species label.
    #[error("unknown species: {value}")]
    UnknownSpecies {
        /// Label that failed to parse.
        value: String,
    },

    /// Viewer location was not provided.
    #[error("location unavailable: pass --lat and --lon or set defaults.latitude/longitude")]
    LocationUnavailable,

    /// Invalid latitude value.
    #[error("invalid latitude: {value} (must be -90.0 to 90.0)")]
    InvalidLatitude {
        /// Invalid latitude value.
        value: f64,
    },

    /// Invalid longitude value.
    #[error("invalid longitude: {value} (must be -180.0 to 180.0)")]
    InvalidLongitude {
        /// Invalid longitude value.
        value: f64,
    },

    /// Could not connect to the database.
    #[error("failed to connect to database: {reason}")]
    DatabaseConnect {
        /// Description of the connection failure.
        reason: String,
    },

    /// A database statement failed.
    #[error("database query failed: {0}")]
    Database(#[from] sqlx::Error),

    /// Stored timestamp could not be parsed.
    #[error("invalid timestamp in database: {value}")]
    InvalidTimestamp {
        /// Raw column value.
        value: String,
    },

    /// Gallery folder could not be read.
    #[error("failed to read image folder '{path}'")]
    GalleryRead {
        /// Path to the folder.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write an output file.
    #[error("failed to write output file '{path}'")]
    OutputWrite {
        /// Path to the output file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize JSON output.
    #[error("failed to serialize JSON output")]
    JsonSerialize {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write CSV output.
    #[error("failed to write CSV output")]
    CsvWrite {
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// Internal error (for unexpected failures).
    #[error("internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}
