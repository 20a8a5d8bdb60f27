//! HTTP surface of the service.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → request_id.rs (assign/propagate x-request-id)
//!     → TraceLayer + TimeoutLayer
//!     → admin routes (settings form API) or /health
//!     → apply.rs sets configured response headers on the way out
//! ```
//!
//! # Design Decisions
//! - The currently persisted document is held in an ArcSwap so the
//!   response-header middleware reads it lock-free on every response
//! - A successful submit refreshes the ArcSwap; there is no file watcher

pub mod apply;
pub mod request_id;
pub mod server;

pub use server::{AppState, HttpServer};
