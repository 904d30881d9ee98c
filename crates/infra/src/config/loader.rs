//! Configuration loader
//!
//! Loads synchronizer configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `APIKEY_SYNC_SERVICE_URL`: Base URL of the API-key service
//! - `APIKEY_SYNC_CLIENT_ID`: Manager client id
//! - `APIKEY_SYNC_CLIENT_SECRET`: Manager client secret
//! - `APIKEY_SYNC_TIMEOUT_SECS`: Request timeout in seconds (optional)
//! - `APIKEY_SYNC_USER_AGENT`: User agent for outbound calls (optional)
//! - `APIKEY_SYNC_LOG_FILTER`: Log filter directive (optional)
//! - `APIKEY_SYNC_LOG_JSON`: Emit JSON logs (true/false, optional)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./apikey-sync.json` or `./apikey-sync.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use apikey_sync_domain::constants::{
    DEFAULT_LOG_FILTER, DEFAULT_REQUEST_TIMEOUT_SECS, ENV_CLIENT_ID, ENV_CLIENT_SECRET,
    ENV_LOG_FILTER, ENV_LOG_JSON, ENV_SERVICE_URL, ENV_TIMEOUT_SECS, ENV_USER_AGENT,
};
use apikey_sync_domain::{
    ApikeyServiceConfig, ApikeySyncError, Config, LoggingConfig, Result, ServiceEndpoint,
};
use reqwest::Url;

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `ApikeySyncError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing or empty
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `ApikeySyncError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    let url = env_var(ENV_SERVICE_URL)?;
    let client_id = env_var(ENV_CLIENT_ID)?;
    let client_secret = env_var(ENV_CLIENT_SECRET)?;

    let request_timeout_seconds = match std::env::var(ENV_TIMEOUT_SECS) {
        Ok(value) => value.parse::<u64>().map_err(|e| {
            ApikeySyncError::Config(format!("Invalid request timeout '{}': {}", value, e))
        })?,
        Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
    };
    let user_agent = std::env::var(ENV_USER_AGENT).ok().filter(|s| !s.trim().is_empty());

    let logging = LoggingConfig {
        filter: std::env::var(ENV_LOG_FILTER).unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
        json: env_bool(ENV_LOG_JSON, false),
    };

    let config = Config {
        apikey_service: ApikeyServiceConfig {
            url,
            client_id,
            client_secret,
            request_timeout_seconds,
            user_agent,
        },
        logging,
    };
    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `ApikeySyncError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing or empty
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ApikeySyncError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ApikeySyncError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ApikeySyncError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ApikeySyncError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ApikeySyncError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(ApikeySyncError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Reject values the synchronizer would silently ignore at `init`.
fn validate(config: &Config) -> Result<()> {
    let service = &config.apikey_service;
    let endpoint = ServiceEndpoint::parse(&service.url)?;
    Url::parse(endpoint.as_str()).map_err(|e| {
        ApikeySyncError::Config(format!("Invalid api key service URL '{}': {}", service.url, e))
    })?;

    if !service.credential().is_complete() {
        return Err(ApikeySyncError::Config(
            "Manager client id and secret must not be empty".to_string(),
        ));
    }
    if service.request_timeout_seconds == 0 {
        return Err(ApikeySyncError::Config("Request timeout must be positive".to_string()));
    }
    Ok(())
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidate_files(&cwd));
        candidates.push(cwd.join("../config.json"));
        candidates.push(cwd.join("../config.toml"));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidate_files(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidate_files(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("apikey-sync.json"),
        dir.join("apikey-sync.toml"),
        dir.join("config.json"),
        dir.join("config.toml"),
    ]
}

/// Get required, non-empty environment variable
fn env_var(key: &str) -> Result<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ApikeySyncError::Config(format!(
            "Missing required environment variable: {}",
            key
        ))),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use once_cell::sync::Lazy;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const ALL_VARS: [&str; 7] = [
        ENV_SERVICE_URL,
        ENV_CLIENT_ID,
        ENV_CLIENT_SECRET,
        ENV_TIMEOUT_SECS,
        ENV_USER_AGENT,
        ENV_LOG_FILTER,
        ENV_LOG_JSON,
    ];

    fn clear_env() {
        for key in ALL_VARS {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_env_bool_parsing() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("APIKEY_SYNC_TEST_BOOL_ON", "ON");
        std::env::set_var("APIKEY_SYNC_TEST_BOOL_OFF", "off");

        assert!(env_bool("APIKEY_SYNC_TEST_BOOL_ON", false));
        assert!(!env_bool("APIKEY_SYNC_TEST_BOOL_OFF", true));
        assert!(env_bool("APIKEY_SYNC_TEST_BOOL_MISSING", true));

        std::env::remove_var("APIKEY_SYNC_TEST_BOOL_ON");
        std::env::remove_var("APIKEY_SYNC_TEST_BOOL_OFF");
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_SERVICE_URL, "https://apikey.example.org/apikey");
        std::env::set_var(ENV_CLIENT_ID, "manager");
        std::env::set_var(ENV_CLIENT_SECRET, "s3cret");
        std::env::set_var(ENV_TIMEOUT_SECS, "12");
        std::env::set_var(ENV_USER_AGENT, "apikey-sync/test");
        std::env::set_var(ENV_LOG_FILTER, "debug");
        std::env::set_var(ENV_LOG_JSON, "true");

        let result = load_from_env();
        assert!(result.is_ok(), "Should load config from env vars, error: {:?}", result.err());

        let config = result.unwrap();
        assert_eq!(config.apikey_service.url, "https://apikey.example.org/apikey");
        assert_eq!(config.apikey_service.client_id, "manager");
        assert_eq!(config.apikey_service.client_secret, "s3cret");
        assert_eq!(config.apikey_service.request_timeout_seconds, 12);
        assert_eq!(config.apikey_service.user_agent.as_deref(), Some("apikey-sync/test"));
        assert_eq!(config.logging.filter, "debug");
        assert!(config.logging.json);

        clear_env();
    }

    #[test]
    fn test_load_from_env_defaults_optional_vars() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_SERVICE_URL, "https://apikey.example.org");
        std::env::set_var(ENV_CLIENT_ID, "manager");
        std::env::set_var(ENV_CLIENT_SECRET, "s3cret");

        let config = load_from_env().expect("config");
        assert_eq!(config.apikey_service.request_timeout_seconds, DEFAULT_REQUEST_TIMEOUT_SECS);
        assert_eq!(config.apikey_service.user_agent, None);
        assert_eq!(config.logging, LoggingConfig::default());

        clear_env();
    }

    #[test]
    fn test_load_from_env_missing_secret() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_SERVICE_URL, "https://apikey.example.org");
        std::env::set_var(ENV_CLIENT_ID, "manager");

        match load_from_env() {
            Err(ApikeySyncError::Config(msg)) => assert!(msg.contains(ENV_CLIENT_SECRET)),
            other => panic!("expected config error, got {:?}", other),
        }

        clear_env();
    }

    #[test]
    fn test_load_from_env_invalid_timeout() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_SERVICE_URL, "https://apikey.example.org");
        std::env::set_var(ENV_CLIENT_ID, "manager");
        std::env::set_var(ENV_CLIENT_SECRET, "s3cret");
        std::env::set_var(ENV_TIMEOUT_SECS, "soon");

        assert!(matches!(load_from_env(), Err(ApikeySyncError::Config(_))));

        clear_env();
    }

    #[test]
    fn test_parse_config_unsupported_extension() {
        let result = parse_config("url: x", Path::new("config.yaml"));
        match result {
            Err(ApikeySyncError::Config(msg)) => assert!(msg.contains("yaml")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_malformed_url() {
        for url in ["apikey.example.org/apikey", "http://", "https://exa mple.org"] {
            let config = Config {
                apikey_service: ApikeyServiceConfig::new(url, "manager", "s3cret"),
                logging: LoggingConfig::default(),
            };
            match validate(&config) {
                Err(ApikeySyncError::Config(msg)) => assert!(msg.contains("URL"), "{url}: {msg}"),
                other => panic!("expected config error for {url}, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_validate_accepts_trailing_slash() {
        let config = Config {
            apikey_service: ApikeyServiceConfig::new(
                "https://apikey.example.org/apikey/",
                "manager",
                "s3cret",
            ),
            logging: LoggingConfig::default(),
        };
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut service = ApikeyServiceConfig::new("https://svc", "manager", "s3cret");
        service.request_timeout_seconds = 0;
        let config = Config { apikey_service: service, logging: LoggingConfig::default() };

        assert!(matches!(validate(&config), Err(ApikeySyncError::Config(_))));
    }
}
