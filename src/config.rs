//! Configuration module for rentz
//!
//! Manages application configuration: which catalog file to browse and the
//! starting state of a fresh feed. Configuration is stored in the user's
//! config directory (`~/.config/rentz/config.toml` on Linux).

use crate::feed::{FilterCriteria, PriceRange};
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RentzConfig {
    /// Catalog JSON file used when `--catalog` is not given
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Max price a fresh feed starts with
    #[serde(default = "default_max_price")]
    pub default_max_price: u32,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

const fn default_max_price() -> u32 {
    PriceRange::DEFAULT_MAX_PRICE
}

impl Default for RentzConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            default_max_price: PriceRange::DEFAULT_MAX_PRICE,
            quiet: false,
        }
    }
}

impl RentzConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("rentz").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or
    /// writing fails.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Filter inputs of a freshly opened feed
    ///
    /// The configured max price is an input like any other, so it is clamped
    /// to the price control's range here.
    #[must_use]
    pub fn initial_criteria(&self) -> FilterCriteria {
        FilterCriteria::builder()
            .max_price(PriceRange::FEED.clamp(self.default_max_price))
            .build()
    }
}
