use std::time::Duration;

use apikey_sync_core::Transport;
use apikey_sync_domain::{
    ApikeySyncError, OutboundRequest, RequestMethod, Result, TransportResponse,
};
use parking_lot::RwLock;
use reqwest::blocking::{Client as BlockingClient, Response};
use reqwest::Method;
use tracing::debug;

use crate::errors::InfraError;

/// Blocking HTTP transport for the API-key service.
///
/// One attempt per call; the response is dropped before `execute` returns,
/// so it is released on every path.
pub struct HttpTransport {
    client: RwLock<Option<BlockingClient>>,
}

impl HttpTransport {
    /// Start building a new HTTP transport.
    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Whether `close` has already released the client.
    pub fn is_closed(&self) -> bool {
        self.client.read().is_none()
    }

    /// Copy out the status line and drop the response unread; the body is
    /// never buffered.
    fn snapshot(response: Response) -> TransportResponse {
        let status = response.status();
        drop(response);
        TransportResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().map(str::to_string),
        }
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: &OutboundRequest) -> Result<TransportResponse> {
        // Clone the handle so the lock is not held across network I/O.
        let client = self
            .client
            .read()
            .clone()
            .ok_or_else(|| ApikeySyncError::Transport("transport closed".into()))?;

        let method = match request.method {
            RequestMethod::Post => Method::POST,
            RequestMethod::Delete => Method::DELETE,
        };

        let mut builder = client.request(method.clone(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        debug!(%method, url = %request.url, "sending HTTP request");

        match builder.send() {
            Ok(response) => {
                let snapshot = Self::snapshot(response);
                debug!(%method, url = %request.url, status = snapshot.status, "received HTTP response");
                Ok(snapshot)
            }
            Err(err) => {
                debug!(%method, url = %request.url, error = %err, "HTTP request failed");
                let infra: InfraError = err.into();
                Err(ApikeySyncError::from(infra))
            }
        }
    }

    fn close(&self) -> Result<()> {
        match self.client.write().take() {
            Some(client) => {
                drop(client);
                debug!("HTTP transport closed");
                Ok(())
            }
            None => Err(ApikeySyncError::Transport("transport already closed".into())),
        }
    }
}

/// Builder for [`HttpTransport`].
#[derive(Debug)]
pub struct HttpTransportBuilder {
    timeout: Duration,
    user_agent: Option<String>,
}

impl Default for HttpTransportBuilder {
    fn default() -> Self {
        Self { timeout: Duration::from_secs(30), user_agent: None }
    }
}

impl HttpTransportBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<HttpTransport> {
        let mut builder = BlockingClient::builder().timeout(self.timeout).no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder.build().map_err(|err| {
            let infra: InfraError = err.into();
            ApikeySyncError::from(infra)
        })?;

        Ok(HttpTransport { client: RwLock::new(Some(client)) })
    }
}
