//! # smcdecode-observability
//!
//! Logging setup for smcdecode binaries.
//!
//! The library crates only emit `tracing` events; installing a subscriber
//! is left to the application. [`init_tracing`] builds one from a
//! [`LogConfig`], with per-component levels and optional JSON output
//! compatible with ELK, Loki and CloudWatch.

pub mod logging;

pub use logging::{init_tracing, LogConfig};
