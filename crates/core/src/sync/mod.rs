//! API-key synchronization: ports, request building and the service

pub mod interpreter;
pub mod ports;
pub mod requests;
pub mod service;

pub use service::ApikeySynchronizer;
