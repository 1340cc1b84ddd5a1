//! Configuration management for the SDK logger
//!
//! This module handles loading, validation, and management of the logger
//! configuration from YAML files. The host application supplies the configured
//! severity once; the logger treats it as immutable for its lifetime.

use crate::error::{CioError, Result};
use crate::level::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (none, error, info, debug)
    pub level: String,

    /// Override for the diagnostic file directory. When unset, the platform
    /// public-downloads equivalent is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "error".to_string(),
            dir: None,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            CioError::config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = serde_yaml::to_string(self)?;
        std::fs::write(path.as_ref(), contents)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        LogLevel::parse(&self.logging.level)?;
        Ok(())
    }

    /// The configured severity threshold
    pub fn log_level(&self) -> Result<LogLevel> {
        LogLevel::parse(&self.logging.level)
    }
}
