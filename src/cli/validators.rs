//! CLI argument validators.
//!
//! Shared validation functions for CLI argument parsing.

use crate::constants::geo::{LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::sighting::Species;

/// Largest accepted gallery column count.
const MAX_COLUMNS: usize = 12;

/// Parse and validate a bounded float value.
///
/// # Arguments
///
/// * `s` - The string to parse
/// * `min` - Minimum allowed value (inclusive)
/// * `max` - Maximum allowed value (inclusive)
/// * `name` - Name of the parameter for error messages
pub fn parse_bounded_float(s: &str, min: f64, max: f64, name: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !(min..=max).contains(&value) {
        return Err(format!(
            "{name} must be between {min:.1} and {max:.1}, got {value}"
        ));
    }

    Ok(value)
}

/// Parse and validate latitude value (-90.0 to 90.0).
pub fn parse_latitude(s: &str) -> Result<f64, String> {
    parse_bounded_float(s, *LATITUDE_RANGE.start(), *LATITUDE_RANGE.end(), "latitude")
}

/// Parse and validate longitude value (-180.0 to 180.0).
pub fn parse_longitude(s: &str) -> Result<f64, String> {
    parse_bounded_float(
        s,
        *LONGITUDE_RANGE.start(),
        *LONGITUDE_RANGE.end(),
        "longitude",
    )
}

/// Parse a species by label ("Sea Bass") or slug ("sea-bass").
pub fn parse_species(s: &str) -> Result<Species, String> {
    s.parse::<Species>().map_err(|_| {
        let known: Vec<&str> = Species::ALL.iter().map(|sp| sp.label()).collect();
        format!("unknown species '{s}' (known: {})", known.join(", "))
    })
}

/// Parse a gallery column count (1-12).
pub fn parse_columns(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid column count"))?;

    if !(1..=MAX_COLUMNS).contains(&value) {
        return Err(format!(
            "columns must be between 1 and {MAX_COLUMNS}, got {value}"
        ));
    }

    Ok(value)
}
