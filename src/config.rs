//! Configuration loading
//!
//! Reads `~/.config/groupie-search/config.toml` when present. A missing file
//! means defaults; a file that cannot be read or parsed also falls back to
//! defaults but carries a warning for the UI to show.

use std::fs;
use std::path::{Path, PathBuf};

mod types;

pub use types::{Config, DisplayConfig, SearchConfig};

const CONFIG_DIR: &str = "groupie-search";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus an optional warning about why defaults were used
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration from `explicit` or from the default location
///
/// An explicit path that does not exist is reported; a missing default file
/// is not.
pub fn load_config(explicit: Option<&Path>) -> ConfigResult {
    if let Some(path) = explicit {
        if !path.exists() {
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Config file {} not found, using defaults", path.display())),
            };
        }
        return load_config_from_path(path);
    }

    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => ConfigResult::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            log::warn!("Failed to read config {}: {}", path.display(), e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read {}: {}", path.display(), e)),
            };
        }
    };

    match parse_config(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Invalid config {}: {}", path.display(), e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config {}, using defaults", path.display())),
            }
        }
    }
}

pub fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(content)
}
