//! Credential and endpoint types
//!
//! The manager client's credentials are only needed long enough to derive
//! the Basic authorization header; the secret is wiped when the
//! [`Credential`] is dropped.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::BASIC_SCHEME;
use crate::errors::{ApikeySyncError, Result};

/// Manager client credentials used to authorize state-changing calls.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Credential {
    client_id: String,
    client_secret: String,
}

impl Credential {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self { client_id: client_id.into(), client_secret: client_secret.into() }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Both the id and the secret are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.client_id.trim().is_empty() && !self.client_secret.is_empty()
    }

    /// Derive `Basic base64(client_id:client_secret)`.
    pub fn authorization_header(&self) -> AuthorizationHeader {
        let mut pair = format!("{}:{}", self.client_id, self.client_secret);
        let encoded = STANDARD.encode(pair.as_bytes());
        pair.zeroize();
        AuthorizationHeader(format!("{BASIC_SCHEME}{encoded}"))
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Precomputed `Authorization` header value for the manager client.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct AuthorizationHeader(String);

impl AuthorizationHeader {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthorizationHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthorizationHeader(<redacted>)")
    }
}

/// Base URL of the API-key service, without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceEndpoint(String);

impl ServiceEndpoint {
    /// # Errors
    ///
    /// Returns `ApikeySyncError::Config` when the URL is blank.
    pub fn parse(url: &str) -> Result<Self> {
        let trimmed = url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ApikeySyncError::Config("Api key service URL is empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join path segments onto the endpoint. Segments are expected to be
    /// already encoded.
    pub fn join(&self, segments: &[&str]) -> String {
        let mut url = self.0.clone();
        for segment in segments {
            url.push('/');
            url.push_str(segment);
        }
        url
    }
}

impl fmt::Display for ServiceEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
