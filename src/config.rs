//! Configuration loaded from `~/.config/pocket-calc/config.toml`.

use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Print the whole calculator state, not just the display.
    pub show_state: bool,
    /// Print output as JSON.
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Default location of the config file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pocket-calc")
            .join("config.toml")
    }

    /// Load the config from `path`.
    ///
    /// A missing file is not an error: the defaults are used.
    pub fn load_from(path: &Path) -> Result<Self, CalcError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| CalcError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents).map_err(|source| CalcError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the config from `path`, writing the defaults there first if
    /// the file does not exist yet.
    pub fn load_or_create(path: &Path) -> Result<Self, CalcError> {
        if !path.exists() {
            let default = Self::default();
            default.save_to(path)?;
            debug!(path = %path.display(), "wrote default config");
            return Ok(default);
        }

        Self::load_from(path)
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), CalcError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| CalcError::ConfigWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let contents = toml::to_string(self)?;
        fs::write(path, contents).map_err(|source| CalcError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}
