// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;
use thiserror::Error;

use crate::generators::RngSource;
use crate::models::ClassSet;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid length bounds: min={min}, default={default}, max={max}")]
    InvalidBounds { min: usize, default: usize, max: usize },
}

// Configuration for the generator and its shells
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_length: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub default_classes: ClassSet,
    pub rng_source: RngSource,

    // Web Interface
    pub api_address: String,
    pub api_port: u16,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_length: 16,
            min_length: 4,
            max_length: 64,
            default_classes: ClassSet::all(),
            rng_source: RngSource::Thread,

            // Web Interface
            api_address: "127.0.0.1".to_string(),
            api_port: 5000,

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; `load` passes the process env.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("PASSFORGE_DEFAULT_LENGTH") {
            match val.parse() {
                Ok(length) => config.default_length = length,
                Err(_) => log::warn!("Ignoring invalid PASSFORGE_DEFAULT_LENGTH '{}'", val),
            }
        }

        if let Some(val) = lookup("PASSFORGE_MIN_LENGTH") {
            match val.parse() {
                Ok(length) => config.min_length = length,
                Err(_) => log::warn!("Ignoring invalid PASSFORGE_MIN_LENGTH '{}'", val),
            }
        }

        if let Some(val) = lookup("PASSFORGE_MAX_LENGTH") {
            match val.parse() {
                Ok(length) => config.max_length = length,
                Err(_) => log::warn!("Ignoring invalid PASSFORGE_MAX_LENGTH '{}'", val),
            }
        }

        if let Some(val) = lookup("PASSFORGE_DEFAULT_CLASSES") {
            match val.parse() {
                Ok(classes) => config.default_classes = classes,
                Err(e) => log::warn!("Ignoring PASSFORGE_DEFAULT_CLASSES: {}", e),
            }
        }

        if let Some(val) = lookup("PASSFORGE_RNG") {
            match val.parse() {
                Ok(source) => config.rng_source = source,
                Err(e) => log::warn!("{}, using thread", e),
            }
        }

        // Web Interface
        if let Some(address) = lookup("PASSFORGE_API_ADDRESS") {
            config.api_address = address;
        }

        if let Some(val) = lookup("PASSFORGE_API_PORT") {
            match val.parse() {
                Ok(port) => config.api_port = port,
                Err(_) => log::warn!("Ignoring invalid PASSFORGE_API_PORT '{}'", val),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }

    /// Length bounds must satisfy `1 <= min <= default <= max`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_length == 0
            || self.min_length > self.default_length
            || self.default_length > self.max_length
        {
            return Err(ConfigError::InvalidBounds {
                min: self.min_length,
                default: self.default_length,
                max: self.max_length,
            });
        }
        Ok(())
    }

    pub fn check_length(&self, length: usize) -> crate::generators::Result<usize> {
        crate::generators::check_length(length, self.min_length, self.max_length)
    }
}
