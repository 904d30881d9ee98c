//! Error types used throughout the synchronizer

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for API-key synchronization
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ApikeySyncError {
    /// The API-key service does not recognise the client id as an API key.
    #[error("Api key not found: {0}")]
    NotFound(String),

    /// The request could not be executed (connect, timeout, closed transport).
    #[error("Transport error: {0}")]
    Transport(String),

    /// An operation that needs the service endpoint ran before `init`.
    #[error("Synchronizer is not initialized")]
    NotInitialized,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApikeySyncError {
    /// Client id carried by a [`ApikeySyncError::NotFound`], if any.
    pub fn missing_client_id(&self) -> Option<&str> {
        match self {
            Self::NotFound(client_id) => Some(client_id),
            _ => None,
        }
    }

    /// Whether the error came from the network layer rather than the remote
    /// service's answer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Result type alias for synchronizer operations
pub type Result<T> = std::result::Result<T, ApikeySyncError>;
