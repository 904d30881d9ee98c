//! API-key synchronization service - core business logic
//!
//! Keeps the enable/disable/delete state of an API key in step with the
//! identity-provider client it belongs to. Every decision re-queries the
//! remote service; nothing is cached apart from the endpoint and the
//! manager client's authorization header.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use apikey_sync_domain::{
    ApikeySyncError, AuthorizationHeader, Credential, RemoteState, Result, ServiceEndpoint,
    SyncOutcome, SyncRequest,
};
use once_cell::sync::OnceCell;
use tracing::{debug, info, instrument, warn};

use super::interpreter::{
    interpret_validate, is_sendable_apikey, remove_failed, transition_failed,
};
use super::ports::Transport;
use super::requests;

/// Endpoint and header, fixed by the first successful `init`.
#[derive(Debug)]
struct Settings {
    endpoint: ServiceEndpoint,
    authorization: AuthorizationHeader,
}

/// Synchronizes client state with the API-key service
pub struct ApikeySynchronizer {
    transport: Arc<dyn Transport>,
    settings: OnceCell<Settings>,
    closed: AtomicBool,
}

impl ApikeySynchronizer {
    /// Create an uninitialized synchronizer on top of a shared transport
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport, settings: OnceCell::new(), closed: AtomicBool::new(false) }
    }

    /// Configure the service endpoint and manager credentials.
    ///
    /// Only the first call with a usable endpoint and complete credentials
    /// takes effect; later calls are ignored. The secret is not retained,
    /// only the derived Basic header.
    ///
    /// Returns `true` when this call configured the synchronizer.
    pub fn init(&self, endpoint: &str, client_id: &str, client_secret: &str) -> bool {
        if self.settings.get().is_some() {
            warn!("Synchronizer already initialized, ignoring init");
            return false;
        }

        let credential = Credential::new(client_id, client_secret);
        if !credential.is_complete() {
            warn!("Ignoring init with empty manager client credentials");
            return false;
        }

        let endpoint = match ServiceEndpoint::parse(endpoint) {
            Ok(endpoint) => endpoint,
            Err(err) => {
                warn!(error = %err, "Ignoring init with invalid service endpoint");
                return false;
            }
        };

        let settings = Settings { authorization: credential.authorization_header(), endpoint };
        let endpoint = settings.endpoint.to_string();
        match self.settings.set(settings) {
            Ok(()) => {
                info!(endpoint = %endpoint, manager_client = %client_id, "Api key synchronizer initialized");
                true
            }
            // Lost a race against a concurrent init.
            Err(_) => false,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.settings.get().is_some()
    }

    /// Configured endpoint, if any
    pub fn endpoint(&self) -> Option<&ServiceEndpoint> {
        self.settings.get().map(|s| &s.endpoint)
    }

    /// Bring the API key's state in line with the client's `enabled` flag.
    ///
    /// The current state is read with a validate call first; when it already
    /// matches, nothing else is sent. Otherwise exactly one reenable or
    /// invalidate call is made.
    ///
    /// # Errors
    ///
    /// - `NotFound` when the service does not recognise `client_id`
    /// - `Transport` when the validate call cannot be executed
    /// - `NotInitialized` before a successful [`init`](Self::init)
    ///
    /// A failed transition call is not an error: it is logged and reported
    /// as [`SyncOutcome::Rejected`] or [`SyncOutcome::Failed`].
    #[instrument(skip(self), fields(client_id = %client_id))]
    pub fn synchronize_client(
        &self,
        client_id: &str,
        external_id: &str,
        enabled: bool,
    ) -> Result<SyncOutcome> {
        let settings = self.settings()?;
        let current = self.query_state(settings, client_id)?;
        let target = RemoteState::from(enabled);

        if current == target {
            debug!(state = %current, "Api key already in desired state");
            return Ok(SyncOutcome::Unchanged { state: current });
        }

        let request = if enabled {
            SyncRequest::Reenable {
                client_id: client_id.to_string(),
                external_id: external_id.to_string(),
            }
        } else {
            SyncRequest::Invalidate { client_id: client_id.to_string() }
        };
        let outbound = requests::build(&request, &settings.endpoint, &settings.authorization);

        debug!(request = request.kind(), url = %outbound.url, "Sending transition request");

        match self.transport.execute(&outbound) {
            Ok(response) if transition_failed(response.status) => {
                warn!(
                    client_id = %client_id,
                    status = response.status,
                    reason = %response.reason_phrase(),
                    "Synchronization for api key failed"
                );
                Ok(SyncOutcome::Rejected { target, status: response.status })
            }
            Ok(_) => {
                info!(client_id = %client_id, state = %target, "Api key synchronized");
                Ok(SyncOutcome::Applied { state: target })
            }
            Err(err) => {
                warn!(client_id = %client_id, error = %err, "Synchronization request for api key failed");
                Ok(SyncOutcome::Failed { target, reason: err.to_string() })
            }
        }
    }

    /// Remove the API key of a client deleted from the identity provider.
    ///
    /// Exactly one removal call is made regardless of the key's state. A
    /// status other than 204 is logged only.
    ///
    /// # Errors
    ///
    /// `Transport` when the call cannot be executed, `NotInitialized` before
    /// `init`.
    #[instrument(skip(self), fields(external_id = %external_id))]
    pub fn delete_client(&self, external_id: &str) -> Result<()> {
        let settings = self.settings()?;
        let request = requests::remove(&settings.endpoint, &settings.authorization, external_id);

        let response = self.transport.execute(&request)?;
        if remove_failed(response.status) {
            warn!(
                external_id = %external_id,
                status = response.status,
                reason = %response.reason_phrase(),
                "Delete api key failed"
            );
        } else {
            info!(external_id = %external_id, "Api key deleted");
        }
        Ok(())
    }

    /// Refresh the key's last-access date; the service updates it on every
    /// validate call.
    ///
    /// # Errors
    ///
    /// Same as the state query of [`synchronize_client`](Self::synchronize_client).
    #[instrument(skip(self), fields(client_id = %client_id))]
    pub fn update_access_date(&self, client_id: &str) -> Result<()> {
        let settings = self.settings()?;
        self.query_state(settings, client_id).map(|_| ())
    }

    /// Release the transport. Only the first call closes it; failures are
    /// logged.
    pub fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            debug!("Synchronizer already closed");
            return;
        }

        if let Err(err) = self.transport.close() {
            warn!(error = %err, "Closing api key synchronizer transport failed");
        }
    }

    fn settings(&self) -> Result<&Settings> {
        self.settings.get().ok_or(ApikeySyncError::NotInitialized)
    }

    fn query_state(&self, settings: &Settings, client_id: &str) -> Result<RemoteState> {
        if !is_sendable_apikey(client_id) {
            debug!("Client id cannot be sent as an api key");
            return Err(ApikeySyncError::NotFound(client_id.to_string()));
        }

        let request = requests::validate(&settings.endpoint, client_id);
        let response = self.transport.execute(&request)?;
        debug!(client_id = %client_id, status = response.status, "Validate response received");
        interpret_validate(client_id, Some(&response))
    }
}
