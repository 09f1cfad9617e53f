use crate::core::{Result, ScenarioError};
use serde::Deserialize;
use std::env;

pub mod connection;
pub mod runner;

pub use connection::ConnectionConfig;
pub use runner::RunnerConfig;

/// Main runner configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub connection: ConnectionConfig,
    pub runner: RunnerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub log_level: String,
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(&|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self> {
        let config = Config {
            app: AppConfig {
                log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
                log_json: lookup("LOG_FORMAT")
                    .map(|format| format.eq_ignore_ascii_case("json"))
                    .unwrap_or(false),
            },
            connection: ConnectionConfig::from_lookup(lookup)?,
            runner: RunnerConfig::from_lookup(lookup)?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.app.log_level.trim().is_empty() {
            return Err(ScenarioError::Configuration(
                "LOG_LEVEL must not be empty".to_string(),
            ));
        }

        self.connection.validate()?;
        self.runner.validate()?;

        Ok(())
    }
}
