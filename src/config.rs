//! Configuration loading.
//!
//! Settings are read from a TOML file in the platform configuration
//! directory (`gridhead/config.toml`). A missing file falls back to
//! defaults; a malformed one is an error rather than a silent default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform configuration directory could not be determined.
    #[error("could not determine the configuration directory")]
    NoConfigDir,

    /// Reading the configuration file failed.
    #[error("failed to read {}", path.display())]
    Read {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML.
    #[error("failed to parse {}", path.display())]
    Parse {
        /// Path of the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// A configured color name was not recognized.
    #[error("unknown color name: {0}")]
    UnknownColor(String),
}

/// Application-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gap inserted between adjacent header columns, in terminal cells.
    pub column_spacing: u16,
    /// Color overrides for the default theme.
    pub theme: ThemeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            column_spacing: 1,
            theme: ThemeConfig::default(),
        }
    }
}

/// Theme colors as configured names.
///
/// Values are parsed by [`Theme::from_config`](crate::ui::theme::Theme::from_config).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Primary foreground color.
    pub fg: String,
    /// Primary background color.
    pub bg: String,
    /// Background for header strips.
    pub header_bg: String,
    /// Highlight color for selected items.
    pub highlight: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            fg: "white".to_string(),
            bg: "black".to_string(),
            header_bg: "dark gray".to_string(),
            highlight: "cyan".to_string(),
        }
    }
}

impl Config {
    /// Load the configuration from the default location, falling back to
    /// defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let path = default_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load the configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Path of the configuration file in the platform config directory.
fn default_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("gridhead").join("config.toml"))
        .ok_or(ConfigError::NoConfigDir)
}
