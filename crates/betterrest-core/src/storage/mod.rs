mod config;

pub use config::{Config, DefaultsConfig, DisplayConfig, ModelConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/betterrest[-dev]/` based on BETTERREST_ENV.
///
/// Set BETTERREST_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("BETTERREST_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("betterrest-dev")
    } else {
        base_dir.join("betterrest")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDirUnavailable(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
