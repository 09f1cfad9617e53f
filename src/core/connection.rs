use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Client;

use super::error::Result;
use crate::config::ConnectionConfig;

pub const AUTHORIZATION: &str = "Authorization";

/// Request context passed explicitly to every SDK call.
///
/// Holds the backend host, the HTTP client handle and the headers to send.
/// A value is never mutated once handed out: switching actors produces a new
/// `Connection`, so scenarios running side by side cannot see each other's
/// credentials.
#[derive(Debug, Clone)]
pub struct Connection {
    http: Client,
    host: String,
    headers: BTreeMap<String, String>,
}

impl Connection {
    /// Build an anonymous connection with a transport configured from `config`
    pub fn from_config(config: &ConnectionConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_client(http, &config.host))
    }

    /// Anonymous connection over an existing client
    pub fn with_client(http: Client, host: &str) -> Self {
        Self {
            http,
            host: host.trim_end_matches('/').to_string(),
            headers: BTreeMap::new(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.host, path)
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn authorization(&self) -> Option<&str> {
        self.headers.get(AUTHORIZATION).map(String::as_str)
    }

    pub fn is_anonymous(&self) -> bool {
        self.authorization().is_none()
    }

    /// Copy of this connection with one extra (or replaced) header
    pub fn with_header(&self, name: &str, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.headers.insert(name.to_string(), value.into());
        next
    }

    /// Copy of this connection authenticated with `access`
    pub fn with_bearer(&self, access: &str) -> Self {
        self.with_header(AUTHORIZATION, format!("Bearer {}", access))
    }

    /// Copy of this connection with no headers at all
    pub fn anonymous(&self) -> Self {
        Self {
            http: self.http.clone(),
            host: self.host.clone(),
            headers: BTreeMap::new(),
        }
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
}
