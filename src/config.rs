//! Configuration management for the `YatraFare` application
//!
//! Handles loading configuration from a TOML file and environment
//! variables, and provides validation for all configuration settings.

use crate::FareError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `YatraFare` application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FareConfig {
    /// Web server configuration
    pub server: ServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Default form values handed to the frontend
    pub defaults: DefaultsConfig,
}

/// Web server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to bind the HTTP listener on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding the built static frontend
    #[serde(default = "default_frontend_dir")]
    pub frontend_dir: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Default form values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Pre-filled traveler count
    #[serde(default = "default_travelers")]
    pub travelers: u32,
    /// Pre-filled flexibility window in days
    #[serde(default = "default_flex_days")]
    pub flex_days: u32,
}

// Default value functions
fn default_port() -> u16 {
    8080
}

fn default_frontend_dir() -> String {
    "frontend/dist".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_travelers() -> u32 {
    1
}

fn default_flex_days() -> u32 {
    0
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            frontend_dir: default_frontend_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            travelers: default_travelers(),
            flex_days: default_flex_days(),
        }
    }
}

impl FareConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| PathBuf::from("config.toml"));

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment variable overrides with YATRAFARE_ prefix, e.g.
        // YATRAFARE_SERVER__PORT=9000
        builder = builder.add_source(
            Environment::with_prefix("YATRAFARE")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: FareConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(FareError::config("Server port cannot be 0").into());
        }

        if self.server.frontend_dir.is_empty() {
            return Err(FareError::config("Frontend directory cannot be empty").into());
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(FareError::config(format!(
                "Invalid log level '{}'. Must be one of: error, warn, info, debug, trace",
                self.logging.level
            ))
            .into());
        }

        if self.defaults.travelers == 0 {
            return Err(FareError::config("Default traveler count must be at least 1").into());
        }

        Ok(())
    }
}
