//! Observability setup
//!
//! Structured logging through `tracing`; no metrics are exported.

pub mod logging;

pub use logging::init_tracing;
