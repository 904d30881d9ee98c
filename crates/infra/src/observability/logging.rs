//! Tracing subscriber bootstrap
//!
//! The host usually owns logging; when it does not, this installs a `fmt`
//! subscriber. `RUST_LOG` takes precedence over the configured filter.

use apikey_sync_domain::{ApikeySyncError, LoggingConfig, Result};
use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber.
///
/// Returns `Ok(false)` when a global subscriber is already set.
///
/// # Errors
///
/// Returns `ApikeySyncError::Config` when the configured filter is invalid.
pub fn init_tracing(config: &LoggingConfig) -> Result<bool> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(&config.filter)?,
    };

    let installed = if config.json {
        tracing_subscriber::fmt().with_env_filter(filter).json().with_target(true).try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).with_target(true).try_init()
    };

    match installed {
        Ok(()) => Ok(true),
        Err(err) => {
            tracing::debug!(error = %err, "Global tracing subscriber already installed");
            Ok(false)
        }
    }
}

fn parse_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|e| {
        ApikeySyncError::Config(format!("Invalid log filter '{}': {}", directives, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_standard_directives() {
        assert!(parse_filter("info").is_ok());
        assert!(parse_filter("warn,apikey_sync_core=debug").is_ok());
    }

    #[test]
    fn rejects_unknown_level() {
        assert!(matches!(parse_filter("apikey_sync_core=loud"), Err(ApikeySyncError::Config(_))));
    }

    #[test]
    fn second_install_reports_existing_subscriber() {
        let config = LoggingConfig::default();
        let _ = init_tracing(&config);
        assert_eq!(init_tracing(&config), Ok(false));
    }
}
