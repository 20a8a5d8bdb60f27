//! Metrics collection and exposition.
//!
//! # Metrics
//! - `header_settings_loads_total` (counter): settings form loads
//! - `header_settings_saves_total{outcome}` (counter): submit attempts by
//!   outcome (`success` / `failure`)
//! - `header_cache_flushes_total` (counter): cache-flush signals sent

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Install the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install Prometheus exporter"),
    }
}

pub fn record_load() {
    metrics::counter!("header_settings_loads_total").increment(1);
}

pub fn record_save(outcome: &'static str) {
    metrics::counter!("header_settings_saves_total", "outcome" => outcome).increment(1);
}

pub fn record_cache_flush() {
    metrics::counter!("header_cache_flushes_total").increment(1);
}
