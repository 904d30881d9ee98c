//! Conversions from external infrastructure errors into domain errors.

use apikey_sync_domain::ApikeySyncError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ApikeySyncError);

impl From<InfraError> for ApikeySyncError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

trait IntoApikeySyncError {
    fn into_apikey_sync(self) -> ApikeySyncError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ApikeySyncError */
/* -------------------------------------------------------------------------- */

impl IntoApikeySyncError for HttpError {
    fn into_apikey_sync(self) -> ApikeySyncError {
        if self.is_builder() {
            return ApikeySyncError::Internal(format!("invalid HTTP request: {self}"));
        }

        if self.is_timeout() {
            return ApikeySyncError::Transport("HTTP request timed out".into());
        }

        if self.is_connect() {
            return ApikeySyncError::Transport(format!("HTTP connection failure: {self}"));
        }

        ApikeySyncError::Transport(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_apikey_sync())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
