//! Cache invalidation signalling.
//!
//! Saved header values can differ from whatever cached responses were built
//! with, so every successful save asks the host environment to flush its
//! response caches. The signal is fire-and-forget: this component never
//! waits on or retries a flush.

use crate::observability::metrics;

/// Host-environment cache invalidation.
pub trait CacheFlush: Send + Sync {
    /// Ask the host environment to invalidate all response caches.
    fn flush_all(&self);
}

/// Default implementation: records the flush in the log and metrics.
///
/// Stands in for whatever cache bus the deployment actually uses; wire a
/// real implementation in by passing it to the server builder.
#[derive(Debug, Default)]
pub struct LoggingCacheFlush;

impl CacheFlush for LoggingCacheFlush {
    fn flush_all(&self) {
        tracing::info!("Requested flush of all response caches");
        metrics::record_cache_flush();
    }
}
