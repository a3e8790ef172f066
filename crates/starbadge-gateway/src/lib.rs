//! starbadge gateway library entry.
//!
//! This crate wires config, the shared upstream client, the metric fetcher and
//! the badge route into a single axum stack. It is consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod router;
pub mod transport;
pub mod upstream;
