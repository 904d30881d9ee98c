//! HTTP transport backed by reqwest's blocking client

pub mod client;

pub use client::{HttpTransport, HttpTransportBuilder};
