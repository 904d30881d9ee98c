//! Protocol constants
//!
//! Paths, header names and status codes shared with the API-key service.
//! These values are part of the remote contract and must not change.

// Paths relative to the service endpoint
pub const VALIDATE_PATH: &str = "validate";
pub const SYNCHRONIZE_PATH: &str = "synchronize";
pub const EXTERNAL_ID_QUERY_PARAM: &str = "keycloakId";

// Headers
pub const AUTHORIZATION_HEADER: &str = "Authorization";
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const APIKEY_SCHEME: &str = "APIKEY ";
pub const BASIC_SCHEME: &str = "Basic ";
pub const JSON_CONTENT_TYPE: &str = "application/json";

// Status codes with domain meaning
pub const STATUS_NO_CONTENT: u16 = 204;
pub const STATUS_GONE: u16 = 410;

// Environment variables read by the configuration loader
pub const ENV_SERVICE_URL: &str = "APIKEY_SYNC_SERVICE_URL";
pub const ENV_CLIENT_ID: &str = "APIKEY_SYNC_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "APIKEY_SYNC_CLIENT_SECRET";
pub const ENV_TIMEOUT_SECS: &str = "APIKEY_SYNC_TIMEOUT_SECS";
pub const ENV_USER_AGENT: &str = "APIKEY_SYNC_USER_AGENT";
pub const ENV_LOG_FILTER: &str = "APIKEY_SYNC_LOG_FILTER";
pub const ENV_LOG_JSON: &str = "APIKEY_SYNC_LOG_JSON";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_FILTER: &str = "info";
