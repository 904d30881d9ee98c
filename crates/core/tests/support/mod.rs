//! Shared test helpers for `apikey-sync-core` integration tests.
//!
//! Provides a scripted in-memory transport so tests can focus on the
//! synchronizer's decisions instead of HTTP plumbing.

pub mod transport;
