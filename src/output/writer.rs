//! Writing rendered output to disk.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Write a rendered document, creating parent directories as needed.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, contents).map_err(|source| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
