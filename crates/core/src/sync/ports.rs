//! Port interfaces for talking to the API-key service
//!
//! These traits define the boundary between the synchronization logic and
//! the HTTP implementation in the infra crate.

use apikey_sync_domain::{OutboundRequest, Result, TransportResponse};

/// Blocking request executor shared by every synchronizer call.
///
/// Implementations must tolerate concurrent use from several threads and
/// must release the underlying response before returning.
pub trait Transport: Send + Sync {
    /// Execute one request and return its status.
    ///
    /// Network failures are reported as `ApikeySyncError::Transport`; any
    /// HTTP status, including errors, is a successful return.
    fn execute(&self, request: &OutboundRequest) -> Result<TransportResponse>;

    /// Release the transport's resources. Later calls to `execute` fail.
    fn close(&self) -> Result<()>;
}
