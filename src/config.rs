//! TOML-based user configuration.
//!
//! Stored at `~/.config/praxis/config.toml`. Missing file means defaults;
//! missing fields in a partial file fall back per field. Unlike the state
//! record, a malformed config file is a real error: the file is user-edited
//! and silently ignoring a typo would be worse than failing loudly.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PraxisError, Result};

const CONFIG_DIR_NAME: &str = "praxis";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// How many log entries the home view previews.
    #[serde(default = "default_log_preview")]
    pub log_preview: usize,

    /// Override for the data directory holding the state and log records.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_log_preview() -> usize {
    6
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_preview: default_log_preview(),
            data_dir: None,
        }
    }
}

impl Config {
    /// Load from the default location; a missing file yields defaults.
    pub fn load() -> Result<Config> {
        Self::from_path(&config_path()?)
    }

    pub fn from_path(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| {
            PraxisError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }
}

/// Path to the user config file (`~/.config/praxis/config.toml`).
pub fn config_path() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| PraxisError::Config("no config directory on this platform".into()))?;
    Ok(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE))
}
