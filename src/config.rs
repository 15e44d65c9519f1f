//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory of the account database
    pub store_path: PathBuf,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_path = lookup("STORE_PATH").unwrap_or_else(|| "./data/accounts".to_string());
        if store_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue("STORE_PATH"));
        }

        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());
        if !matches!(environment.as_str(), "development" | "production" | "test") {
            return Err(ConfigError::InvalidValue("ENVIRONMENT"));
        }

        Ok(Self {
            store_path: PathBuf::from(store_path),
            environment,
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
