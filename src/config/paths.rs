//! Configuration file location.

use crate::constants::APP_NAME;
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Environment variable that points at an explicit config file.
pub const CONFIG_PATH_ENV: &str = "FISHFIND_CONFIG";

/// Platform configuration directory.
///
/// - Linux: `~/.config/fishfind/`
/// - macOS: `~/Library/Application Support/fishfind/`
/// - Windows: `%APPDATA%\fishfind\`
pub fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(Error::ConfigDirNotFound)
}

/// Path of the config file, honouring `FISHFIND_CONFIG`.
pub fn config_file_path() -> Result<PathBuf> {
    match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Ok(config_dir()?.join("config.toml")),
    }
}
