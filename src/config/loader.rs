use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/mars-photos/config.toml` on Unix,
    /// or the equivalent via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("mars-photos").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            return Err(validation("api.base_url must not be empty"));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(validation(format!(
                "api.base_url '{}' must start with http:// or https://",
                base_url
            )));
        }
        if self.api.timeout_seconds == 0 {
            return Err(validation("api.timeout_seconds must be at least 1"));
        }
        if self.api.connect_timeout_seconds == 0 {
            return Err(validation("api.connect_timeout_seconds must be at least 1"));
        }
        if !(1..=100).contains(&self.share.jpeg_quality) {
            return Err(validation(format!(
                "share.jpeg_quality must be between 1 and 100, got {}",
                self.share.jpeg_quality
            )));
        }
        if self.share.file_name.trim().is_empty() {
            return Err(validation("share.file_name must not be empty"));
        }
        if let Some(command) = &self.share.command {
            if command.first().map_or(true, |program| program.trim().is_empty()) {
                return Err(validation("share.command needs a program name"));
            }
        }
        if self.ui.grid_columns == 0 {
            return Err(validation("ui.grid_columns must be at least 1"));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(validation("ui.tick_rate_ms must be at least 1"));
        }
        Ok(())
    }
}

fn validation(message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        message: message.into(),
    }
}
