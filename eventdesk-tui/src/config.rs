//! Config file loading.
//!
//! A small TOML file at the platform config dir; a missing file is
//! not an error and yields the defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors from loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration as stored in the TOML file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct DeskConfig {
    /// Theme name to start with.
    pub theme: Option<String>,
}

impl DeskConfig {
    /// Loads the config from `path`, or the default location when `None`.
    ///
    /// A missing file yields `DeskConfig::default()`; unreadable or
    /// malformed files are errors.
    pub fn load(path: Option<&Path>) -> Result<DeskConfig, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config = toml::from_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Platform config path (`~/.config/eventdesk/config.toml` on Linux).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("eventdesk").join("config.toml"))
    }
}
