//! # Apikey Sync Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - Blocking HTTP transport for the API-key service
//! - Configuration loading (environment, JSON/TOML files)
//! - Tracing subscriber bootstrap
//! - Wiring from configuration to a ready `ApikeySynchronizer`
//!
//! ## Architecture
//! - Implements traits defined in `apikey-sync-core`
//! - Contains all "impure" code (network, filesystem, environment)

pub mod bootstrap;
pub mod config;
pub mod errors;
pub mod http;
pub mod observability;

// Re-export commonly used items
pub use bootstrap::{build_synchronizer, from_config, from_environment};
pub use errors::InfraError;
pub use http::{HttpTransport, HttpTransportBuilder};
