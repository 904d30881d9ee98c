//! Configuration structures
//!
//! Loading lives in the infra crate; these types only describe the shape.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LOG_FILTER, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::types::Credential;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub apikey_service: ApikeyServiceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Connection settings for the API-key service
#[derive(Clone, Serialize, Deserialize)]
pub struct ApikeyServiceConfig {
    /// Base URL of the service (e.g. "https://apikey.example.org/apikey")
    pub url: String,
    /// Manager client id used for Basic authorization
    pub client_id: String,
    pub client_secret: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl ApikeyServiceConfig {
    pub fn new(
        url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: None,
        }
    }

    pub fn credential(&self) -> Credential {
        Credential::new(self.client_id.clone(), self.client_secret.clone())
    }
}

impl fmt::Debug for ApikeyServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApikeyServiceConfig")
            .field("url", &self.url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("request_timeout_seconds", &self.request_timeout_seconds)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Logging subscriber settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG` when set
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_log_filter(), json: false }
    }
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}
