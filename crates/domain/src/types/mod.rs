//! Domain types for API-key synchronization

pub mod credentials;
pub mod request;
pub mod state;

pub use credentials::{AuthorizationHeader, Credential, ServiceEndpoint};
pub use request::{OutboundRequest, RequestMethod, SyncRequest, TransportResponse};
pub use state::{RemoteState, SyncOutcome};
