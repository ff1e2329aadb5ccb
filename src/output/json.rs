//! JSON output.

use crate::error::{Error, Result};
use crate::output::SightingReport;

/// Pretty-printed JSON for a report, newline-terminated.
pub fn render_json(report: &SightingReport) -> Result<String> {
    let mut json =
        serde_json::to_string_pretty(report).map_err(|source| Error::JsonSerialize { source })?;
    json.push('\n');
    Ok(json)
}
