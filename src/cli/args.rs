//! CLI argument definitions.

use crate::cli::validators::{parse_columns, parse_latitude, parse_longitude, parse_species};
use crate::config::OutputFormat;
use crate::geo::DisplayMode;
use crate::sighting::Species;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Classify fish photos and map where each species was seen.
#[derive(Debug, Parser)]
#[command(name = "fishfind")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Only show warnings and errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace, -vvv: trace including dependencies).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the showcase image gallery.
    Gallery(GalleryArgs),
    /// Classify a photo and record where it was taken.
    Upload(UploadArgs),
    /// Find recorded sightings of a species.
    Find(FindArgs),
    /// List the species the classifier knows.
    Species,
    /// Manage the sightings database.
    Db {
        /// Database connection options.
        #[command(flatten)]
        database: DatabaseArgs,
        /// Database action to perform.
        #[command(subcommand)]
        action: DbAction,
    },
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Database subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum DbAction {
    /// Create the sightings table if it does not exist.
    Init,
    /// Count stored sightings per species.
    Stats,
}

/// Database connection options.
#[derive(Debug, Clone, Default, Args)]
pub struct DatabaseArgs {
    /// Database URL (mysql://... or sqlite://...), overrides config.
    #[arg(long, env = "FISHFIND_DATABASE_URL")]
    pub db_url: Option<String>,
}

/// Viewer location options.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct LocationArgs {
    /// Your latitude (-90.0 to 90.0).
    #[arg(long, value_parser = parse_latitude, env = "FISHFIND_LATITUDE", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Your longitude (-180.0 to 180.0).
    #[arg(long, value_parser = parse_longitude, env = "FISHFIND_LONGITUDE", allow_hyphen_values = true)]
    pub lon: Option<f64>,
}

/// Arguments for the gallery command.
#[derive(Debug, Args)]
pub struct GalleryArgs {
    /// Folder of showcase images (default: config `defaults.images_dir`).
    pub dir: Option<PathBuf>,

    /// Images per row.
    #[arg(long, value_parser = parse_columns)]
    pub columns: Option<usize>,

    /// Output HTML file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the upload command.
#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Photo to classify (jpg, jpeg, png, gif, bmp).
    pub image: PathBuf,

    /// Where the photo was taken.
    #[command(flatten)]
    pub location: LocationArgs,

    /// Database connection options.
    #[command(flatten)]
    pub database: DatabaseArgs,

    /// Path to the ONNX model file (overrides config).
    #[arg(short, long, env = "FISHFIND_MODEL")]
    pub model: Option<PathBuf>,

    /// Enable CUDA GPU acceleration.
    #[arg(long, conflicts_with = "cpu")]
    pub gpu: bool,

    /// Force CPU inference.
    #[arg(long, conflicts_with = "gpu")]
    pub cpu: bool,

    /// Hide the progress spinner.
    #[arg(long)]
    pub no_progress: bool,
}

/// Arguments for the find command.
#[derive(Debug, Args)]
pub struct FindArgs {
    /// Species to look for, by name ("Sea Bass") or slug (sea-bass).
    #[arg(value_parser = parse_species)]
    pub species: Species,

    /// Your location, used to centre the map and rank by distance.
    #[command(flatten)]
    pub location: LocationArgs,

    /// Database connection options.
    #[command(flatten)]
    pub database: DatabaseArgs,

    /// Which sightings to show.
    #[arg(long, value_enum, default_value_t = DisplayMode::All)]
    pub mode: DisplayMode,

    /// Output format (map, json, csv).
    #[arg(short, long, default_value_t = OutputFormat::Map)]
    pub format: OutputFormat,

    /// Output file (default depends on format).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
