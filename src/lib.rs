//! Fishfind - fish photo classification and sighting map CLI.
//!
//! Classifies a photo into one of nine fish species, records the species with
//! the uploader's location, and renders stored sightings on a marker map.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod geo;
pub mod inference;
pub mod output;
pub mod photo;
pub mod pipeline;
pub mod sighting;
pub mod store;

use clap::{Parser, ValueEnum};
use cli::{Cli, Command, DatabaseArgs, FindArgs, GalleryArgs, LocationArgs, UploadArgs};
use config::{
    Config, InferenceDevice, OutputFormat, config_file_path, load_default_config,
    save_default_config,
};
use constants::gallery;
use geo::DisplayMode;
use inference::{FishClassifier, OnnxModel};
use output::{
    MapView, SightingReport, SightingRow, render_csv, render_gallery, render_json, write_output,
};
use photo::check_image;
use pipeline::{FindOutcome, UploadOptions, find_sightings, upload_sighting};
use sighting::{Coordinates, Sighting, Species};
use std::path::PathBuf;
use store::SightingStore;
use tracing::info;

pub use error::{Error, Result};

/// Main entry point for fishfind CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let Some(command) = cli.command else {
        let config_exists = config_file_path().is_ok_and(|path| path.exists());
        cli::help::print_smart_help(config_exists);
        return Ok(());
    };

    // Config commands must work even when the file is broken
    if let Command::Config { action } = command {
        return handle_config_command(action);
    }

    let config = load_default_config()?;
    handle_command(command, &config, cli.quiet)
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    // ORT and sqlx are noisy at info level; -v and up let them through.
    let filter_str = if quiet {
        "warn,ort=off,sqlx=warn".to_string()
    } else {
        match verbose {
            0 => "info,ort=off,sqlx=warn".to_string(),
            1 => "debug,ort=warn,sqlx=info".to_string(),
            2 => "trace,ort=info,sqlx=debug".to_string(),
            _ => "trace".to_string(),
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_command(command: Command, config: &Config, quiet: bool) -> Result<()> {
    match command {
        Command::Gallery(args) => handle_gallery_command(args, config),
        Command::Upload(args) => handle_upload_command(args, config, quiet),
        Command::Find(args) => handle_find_command(args, config),
        Command::Species => {
            handle_species_command();
            Ok(())
        }
        Command::Db { database, action } => handle_db_command(action, &database, config),
        Command::Config { action } => handle_config_command(action),
    }
}

fn handle_gallery_command(args: GalleryArgs, config: &Config) -> Result<()> {
    let dir = args
        .dir
        .unwrap_or_else(|| config.defaults.images_dir.clone());
    let columns = args.columns.unwrap_or(gallery::DEFAULT_COLUMNS);
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(gallery::DEFAULT_OUTPUT));

    let html = render_gallery(&dir, columns)?;
    write_output(&output, &html)?;

    println!("Gallery of {} written to {}", dir.display(), output.display());
    Ok(())
}

fn handle_upload_command(args: UploadArgs, config: &Config, quiet: bool) -> Result<()> {
    check_image(&args.image)?;

    let viewer = resolve_viewer(args.location, config)?;

    let device = if args.gpu {
        InferenceDevice::Gpu
    } else if args.cpu {
        InferenceDevice::Cpu
    } else {
        config.inference.device
    };
    let model_path = args.model.unwrap_or_else(|| config.model.path.clone());
    let mut classifier = FishClassifier::new(OnnxModel::load(&model_path, device)?);

    let options = UploadOptions {
        input_size: config.model.input_size,
        progress: !quiet && !args.no_progress,
    };

    let outcome = block_on(async {
        let store = connect_store(&args.database, config).await?;
        let result = async {
            store.ensure_schema().await?;
            upload_sighting(&args.image, viewer, &mut classifier, &store, options).await
        }
        .await;
        store.close().await;
        result
    })?;

    println!("{}", outcome.classification.species);
    println!(
        "Recorded {} at {} on {}.",
        outcome.sighting.species,
        outcome.sighting.location,
        store::format_timestamp(outcome.sighting.observed_at)
    );
    Ok(())
}

fn handle_find_command(args: FindArgs, config: &Config) -> Result<()> {
    let viewer = resolve_viewer(args.location, config)?;
    let species = args.species;

    let outcome = block_on(async {
        let store = connect_store(&args.database, config).await?;
        let result = async {
            store.ensure_schema().await?;
            find_sightings(species, args.mode, viewer, &store).await
        }
        .await;
        store.close().await;
        result
    })?;

    println!("You searched for: {species}");

    let (all_count, selected) = match outcome {
        FindOutcome::NoLocations => {
            println!("No locations found for {species}.");
            return Ok(());
        }
        FindOutcome::Found {
            all_count,
            selected,
        } => (all_count, selected),
    };

    let contents = render_find_output(
        args.format,
        species,
        args.mode,
        viewer,
        all_count,
        &selected,
        config,
    )?;
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(args.format.default_file_name()));
    write_output(&output, &contents)?;

    println!(
        "Showing {} of {} location(s) of {} ({}), written to {}",
        selected.len(),
        all_count,
        species,
        args.mode,
        output.display()
    );
    Ok(())
}

fn render_find_output(
    format: OutputFormat,
    species: Species,
    mode: DisplayMode,
    viewer: Coordinates,
    all_count: usize,
    selected: &[Sighting],
    config: &Config,
) -> Result<String> {
    match format {
        OutputFormat::Map => MapView::new(viewer, &config.map)
            .with_sightings(selected)
            .render_html(&format!("Locations of {species}")),
        OutputFormat::Json => render_json(&SightingReport::new(
            species, mode, viewer, all_count, selected,
        )),
        OutputFormat::Csv => {
            let rows: Vec<SightingRow> = selected
                .iter()
                .map(|s| SightingRow::new(s, viewer))
                .collect();
            render_csv(&rows)
        }
    }
}

fn handle_species_command() {
    for species in Species::ALL {
        let slug = species
            .to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_default();
        println!("{:>2}  {:<20} {}", species.index(), species.label(), slug);
    }
}

fn handle_db_command(
    action: cli::DbAction,
    database: &DatabaseArgs,
    config: &Config,
) -> Result<()> {
    use cli::DbAction;

    block_on(async {
        let store = connect_store(database, config).await?;
        let result = match action {
            DbAction::Init => store.ensure_schema().await.map(|()| {
                println!("Table {} is ready.", constants::database::TABLE);
            }),
            DbAction::Stats => store.count_by_species().await.map(|counts| {
                let mut total = 0;
                for species in Species::ALL {
                    let count = counts
                        .iter()
                        .find(|(s, _)| *s == species)
                        .map_or(0, |(_, c)| *c);
                    total += count;
                    println!("{:<20} {count}", species.label());
                }
                println!("{:<20} {total}", "Total");
            }),
        };
        store.close().await;
        result
    })
}

fn handle_config_command(action: cli::ConfigAction) -> Result<()> {
    use cli::ConfigAction;

    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let config = Config::default();
                let saved_path = save_default_config(&config)?;
                println!("Created configuration file: {}", saved_path.display());
                println!("\nNext steps:");
                println!("  Set [database] and [defaults] latitude/longitude in the file");
                println!("  fishfind db init");
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

/// Viewer location from flags or environment, falling back to config defaults.
fn resolve_viewer(location: LocationArgs, config: &Config) -> Result<Coordinates> {
    let latitude = location.lat.or(config.defaults.latitude);
    let longitude = location.lon.or(config.defaults.longitude);

    match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => {
            let viewer = Coordinates::new(latitude, longitude)?;
            info!("Your location: {viewer}");
            Ok(viewer)
        }
        _ => Err(Error::LocationUnavailable),
    }
}

async fn connect_store(args: &DatabaseArgs, config: &Config) -> Result<SightingStore> {
    let mut database = config.database.clone();
    if let Some(url) = &args.db_url {
        database.url = Some(url.clone());
    }
    SightingStore::connect(&database).await
}

/// Run a future on a single-threaded runtime.
fn block_on<T>(future: impl std::future::Future<Output = Result<T>>) -> Result<T> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::Internal {
            message: format!("failed to create async runtime: {e}"),
        })?;
    runtime.block_on(future)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use config::DefaultsConfig;

    fn config_with_defaults(latitude: Option<f64>, longitude: Option<f64>) -> Config {
        Config {
            defaults: DefaultsConfig {
                latitude,
                longitude,
                ..DefaultsConfig::default()
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_flags_override_config_location() {
        let config = config_with_defaults(Some(10.0), Some(20.0));
        let flags = LocationArgs {
            lat: Some(-33.9),
            lon: Some(18.4),
        };
        let viewer = resolve_viewer(flags, &config).unwrap();
        assert_eq!(viewer, Coordinates::new(-33.9, 18.4).unwrap());
    }

    #[test]
    fn test_config_location_fills_missing_flags() {
        let config = config_with_defaults(Some(10.0), Some(20.0));
        let flags = LocationArgs {
            lat: Some(11.0),
            lon: None,
        };
        let viewer = resolve_viewer(flags, &config).unwrap();
        assert_eq!(viewer, Coordinates::new(11.0, 20.0).unwrap());
    }

    #[test]
    fn test_missing_location_has_no_fallback() {
        let config = config_with_defaults(None, None);
        let result = resolve_viewer(LocationArgs::default(), &config);
        assert!(matches!(result, Err(Error::LocationUnavailable)));

        let half = LocationArgs {
            lat: Some(1.0),
            lon: None,
        };
        assert!(matches!(
            resolve_viewer(half, &config),
            Err(Error::LocationUnavailable)
        ));
    }

    #[test]
    fn test_render_find_output_formats() {
        let config = Config::default();
        let viewer = Coordinates::new(41.0, 29.0).unwrap();
        let selected = vec![Sighting::new(
            Species::SeaBass,
            Coordinates::new(41.2, 29.1).unwrap(),
            chrono::NaiveDate::from_ymd_opt(2024, 9, 1)
                .unwrap()
                .and_hms_opt(6, 0, 0)
                .unwrap(),
        )];

        let html = render_find_output(
            OutputFormat::Map,
            Species::SeaBass,
            DisplayMode::All,
            viewer,
            1,
            &selected,
            &config,
        )
        .unwrap();
        assert!(html.contains("<title>Locations of Sea Bass</title>"));

        let csv = render_find_output(
            OutputFormat::Csv,
            Species::SeaBass,
            DisplayMode::All,
            viewer,
            1,
            &selected,
            &config,
        )
        .unwrap();
        assert_eq!(csv.lines().count(), 2);

        let json = render_find_output(
            OutputFormat::Json,
            Species::SeaBass,
            DisplayMode::Latest,
            viewer,
            1,
            &selected,
            &config,
        )
        .unwrap();
        assert!(json.contains("\"mode\": \"latest\""));
    }
}
