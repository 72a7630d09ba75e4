//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `FIGHTER_INSIGHTS` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment yields a runnable config.
//!
//! # Example
//!
//! ```no_run
//! use fighter_insights::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod analysis;
mod dashboard;
mod error;
mod server;
mod storage;

pub use analysis::AnalysisConfig;
pub use dashboard::DashboardConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, middleware)
    #[serde(default)]
    pub server: ServerConfig,

    /// In-memory storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Scoring heuristic configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Dashboard configuration
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FIGHTER_INSIGHTS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `FIGHTER_INSIGHTS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `FIGHTER_INSIGHTS__ANALYSIS__RANDOM_SEED=42` -> `analysis.random_seed = 42`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FIGHTER_INSIGHTS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.dashboard.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
