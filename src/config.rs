//! Configuration loading
//!
//! Reads `~/.config/platepal/config.toml` (or an explicit `--config` path) and
//! applies environment overrides. The API key is never compiled in: it comes
//! from the `[api]` section or the `GEMINI_API_KEY` environment variable, with
//! the environment taking precedence.

use std::path::{Path, PathBuf};

use crate::error::PlatePalError;

mod types;

pub use types::{ApiConfig, Config, LocationConfig};

/// Directory under `~/.config` holding platepal files
pub const CONFIG_DIR: &str = "platepal";

/// Config file name inside [`CONFIG_DIR`]
const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding `[api] key`
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default location of the config file, if a home directory exists
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration from the given path, or the default location.
///
/// An explicit path must exist and parse; the default location is optional
/// and falls back to built-in defaults when absent.
pub fn load(path: Option<&Path>) -> Result<Config, PlatePalError> {
    let mut config = match path {
        Some(explicit) => read_config(explicit)?,
        None => match default_config_path() {
            Some(default) if default.exists() => read_config(&default)?,
            _ => Config::default(),
        },
    };

    apply_api_key_override(&mut config, std::env::var(API_KEY_ENV).ok());
    Ok(config)
}

fn read_config(path: &Path) -> Result<Config, PlatePalError> {
    let contents = std::fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|e| PlatePalError::InvalidConfig(e.to_string()))
}

/// Apply the environment API key on top of the file value.
///
/// Blank values are ignored so that `GEMINI_API_KEY=""` cannot blank out a
/// key configured in the file.
fn apply_api_key_override(config: &mut Config, value: Option<String>) {
    if let Some(key) = value.filter(|k| !k.trim().is_empty()) {
        config.api.key = Some(key);
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
