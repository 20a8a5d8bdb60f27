//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging through `tracing`, level configurable via
//!   `RUST_LOG` or the config file
//! - Metrics are cheap counters; the Prometheus exporter is optional and
//!   off by default

pub mod logging;
pub mod metrics;
