//! Outbound call descriptions exchanged with the transport port

use std::fmt;

use serde::{Deserialize, Serialize};

/// One logical call to the API-key service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SyncRequest {
    /// Check (and touch) the API key named by the client id.
    Validate { client_id: String },
    /// Re-enable a disabled API key, linking it to the identity-provider id.
    Reenable { client_id: String, external_id: String },
    /// Disable the API key.
    Invalidate { client_id: String },
    /// Remove the API key of a deleted client, addressed by external id.
    Remove { external_id: String },
}

impl SyncRequest {
    /// Short label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validate { .. } => "validate",
            Self::Reenable { .. } => "reenable",
            Self::Invalidate { .. } => "invalidate",
            Self::Remove { .. } => "remove",
        }
    }

    /// Whether the call changes state on the remote service.
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Self::Validate { .. })
    }
}

/// HTTP method of an outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequestMethod {
    Post,
    Delete,
}

impl RequestMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport-neutral request: method, absolute URL and headers.
///
/// `Debug` hides header values since they carry credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub method: RequestMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl OutboundRequest {
    pub fn new(method: RequestMethod, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), headers: Vec::new() }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// First value of a header, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Debug for OutboundRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.headers.iter().map(|(name, _)| name.as_str()).collect();
        f.debug_struct("OutboundRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &names)
            .finish()
    }
}

/// Owned snapshot of a response. The transport releases the underlying
/// response before handing this back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportResponse {
    pub status: u16,
    pub reason: Option<String>,
}

impl TransportResponse {
    pub fn new(status: u16) -> Self {
        Self { status, reason: None }
    }

    pub fn with_reason(status: u16, reason: impl Into<String>) -> Self {
        Self { status, reason: Some(reason.into()) }
    }

    /// Reason phrase, or an empty string when the transport had none.
    pub fn reason_phrase(&self) -> &str {
        self.reason.as_deref().unwrap_or_default()
    }
}
