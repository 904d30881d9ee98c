//! # Apikey Sync Domain
//!
//! Domain types for keeping the API-key service in step with the lifecycle
//! of identity-provider clients.
//!
//! This crate contains:
//! - Credential, header and endpoint types
//! - Request/response descriptions exchanged with the transport port
//! - Remote state and synchronization outcomes
//! - Error types and Result definitions
//! - Configuration structures and protocol constants
//!
//! ## Architecture
//! - No dependencies on other workspace crates
//! - No I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
