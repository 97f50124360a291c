// src/config/quadring_config.rs

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main quadring configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuadringConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Optional prime cache file, preloaded on startup and written back
    /// after each factorization session
    pub prime_cache_file: Option<String>,

    /// Sieve tuning
    pub sieve: SieveConfig,
}

/// Sieve configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SieveConfig {
    /// Bound of the first extension when the prime list starts out empty
    pub bootstrap_bound: u64,
}

impl Default for QuadringConfig {
    fn default() -> Self {
        QuadringConfig {
            log_level: "info".to_string(),
            prime_cache_file: None,
            sieve: SieveConfig::default(),
        }
    }
}

impl Default for SieveConfig {
    fn default() -> Self {
        SieveConfig {
            bootstrap_bound: 100,
        }
    }
}

impl QuadringConfig {
    /// Load configuration with precedence: defaults → config file → env vars
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("log_level", "info")?
            .set_default("sieve.bootstrap_bound", 100)?;

        if Path::new("quadring.toml").exists() {
            builder = builder.add_source(File::with_name("quadring.toml"));
        }

        builder = builder.add_source(
            Environment::with_prefix("QUADRING")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load configuration from a specific file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("log_level", "info")?
            .set_default("sieve.bootstrap_bound", 100)?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        builder = builder.add_source(
            Environment::with_prefix("QUADRING")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
