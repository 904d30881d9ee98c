//! # Apikey Sync Core
//!
//! Pure synchronization logic - no infrastructure dependencies.
//!
//! This crate contains:
//! - The transport port (trait) the HTTP adapter implements
//! - Request builders for the API-key service protocol
//! - Response interpretation into remote key state
//! - The `ApikeySynchronizer` service
//!
//! ## Architecture Principles
//! - Only depends on `apikey-sync-domain`
//! - No HTTP or configuration loading code
//! - All external calls go through [`Transport`]

pub mod sync;

pub use sync::ports::Transport;
pub use sync::ApikeySynchronizer;
