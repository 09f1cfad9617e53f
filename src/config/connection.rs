use crate::core::{Result, ScenarioError};
use serde::Deserialize;

pub const DEFAULT_HOST: &str = "http://127.0.0.1:37001";

/// Where the backend under test lives and how long a call may take
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionConfig {
    pub host: String,
    pub timeout_secs: u64,
}

impl ConnectionConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            timeout_secs: 30,
        }
    }

    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(ConnectionConfig {
            host: lookup("MALL_E2E_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            timeout_secs: lookup("MALL_E2E_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .parse()
                .map_err(|_| {
                    ScenarioError::Configuration("Invalid MALL_E2E_TIMEOUT_SECS".to_string())
                })?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if !self.host.starts_with("http://") && !self.host.starts_with("https://") {
            return Err(ScenarioError::Configuration(format!(
                "MALL_E2E_HOST must be an http(s) URL, got {}",
                self.host
            )));
        }

        if self.timeout_secs == 0 {
            return Err(ScenarioError::Configuration(
                "Request timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
