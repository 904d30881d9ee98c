//! Wiring from configuration to a ready synchronizer

use std::sync::Arc;
use std::time::Duration;

use apikey_sync_core::ApikeySynchronizer;
use apikey_sync_domain::{ApikeyServiceConfig, ApikeySyncError, Config, Result};
use tracing::info;

use crate::http::HttpTransport;
use crate::observability::init_tracing;

/// Build an HTTP-backed synchronizer and initialize it once.
///
/// # Errors
///
/// - `Internal` if the HTTP client cannot be built
/// - `Config` if the endpoint or credentials are unusable
pub fn build_synchronizer(config: &ApikeyServiceConfig) -> Result<ApikeySynchronizer> {
    let mut builder =
        HttpTransport::builder().timeout(Duration::from_secs(config.request_timeout_seconds));
    if let Some(agent) = &config.user_agent {
        builder = builder.user_agent(agent.clone());
    }

    let synchronizer = ApikeySynchronizer::new(Arc::new(builder.build()?));
    if !synchronizer.init(&config.url, &config.client_id, &config.client_secret) {
        return Err(ApikeySyncError::Config(
            "Api key service URL and manager credentials are required".to_string(),
        ));
    }
    Ok(synchronizer)
}

/// Install logging (unless the host already did) and build the synchronizer.
///
/// # Errors
///
/// See [`build_synchronizer`] and [`init_tracing`].
pub fn from_config(config: &Config) -> Result<ApikeySynchronizer> {
    if init_tracing(&config.logging)? {
        info!(filter = %config.logging.filter, "Tracing subscriber installed");
    }
    build_synchronizer(&config.apikey_service)
}

/// Load configuration from the environment or a config file, then build.
///
/// # Errors
///
/// See [`crate::config::load`] and [`from_config`].
pub fn from_environment() -> Result<ApikeySynchronizer> {
    let config = crate::config::load()?;
    from_config(&config)
}
