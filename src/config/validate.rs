//! Configuration validation.

use crate::config::Config;
use crate::constants::{geo, map, model};
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_model(config)?;
    validate_map(config)?;
    validate_database(config)?;

    if let (Some(lat), Some(lon)) = (config.defaults.latitude, config.defaults.longitude) {
        validate_coordinates(lat, lon)?;
    } else if let Some(lat) = config.defaults.latitude {
        validate_latitude(lat)?;
    } else if let Some(lon) = config.defaults.longitude {
        validate_longitude(lon)?;
    }

    Ok(())
}

/// Check that a latitude/longitude pair is on the globe.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    validate_latitude(latitude)?;
    validate_longitude(longitude)
}

fn validate_latitude(value: f64) -> Result<()> {
    if geo::LATITUDE_RANGE.contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidLatitude { value })
    }
}

fn validate_longitude(value: f64) -> Result<()> {
    if geo::LONGITUDE_RANGE.contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidLongitude { value })
    }
}

fn validate_model(config: &Config) -> Result<()> {
    let size = config.model.input_size;
    if !(model::MIN_INPUT_SIZE..=model::MAX_INPUT_SIZE).contains(&size) {
        return Err(Error::ConfigValidation {
            message: format!(
                "model.input_size must be between {} and {}, got {size}",
                model::MIN_INPUT_SIZE,
                model::MAX_INPUT_SIZE
            ),
        });
    }
    Ok(())
}

fn validate_map(config: &Config) -> Result<()> {
    if config.map.zoom > map::MAX_ZOOM {
        return Err(Error::ConfigValidation {
            message: format!(
                "map.zoom must be at most {}, got {}",
                map::MAX_ZOOM,
                config.map.zoom
            ),
        });
    }

    if !config.map.tile_url.contains("{z}") {
        return Err(Error::ConfigValidation {
            message: "map.tile_url must contain a {z} placeholder".to_string(),
        });
    }

    Ok(())
}

fn validate_database(config: &Config) -> Result<()> {
    let db = &config.database;
    if db.url.is_some() {
        return Ok(());
    }

    if db.host.trim().is_empty() {
        return Err(Error::ConfigValidation {
            message: "database.host must not be empty".to_string(),
        });
    }

    if db.database.trim().is_empty() {
        return Err(Error::ConfigValidation {
            message: "database.database must not be empty".to_string(),
        });
    }

    if db.port == 0 {
        return Err(Error::ConfigValidation {
            message: "database.port must be non-zero".to_string(),
        });
    }

    Ok(())
}
