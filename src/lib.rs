//! HTTP Response Header Settings Service
//!
//! Lets a site administrator configure a fixed set of HTTP response headers
//! (six security headers plus Cache-Control) through a settings form,
//! persists them under a named settings document, applies them to outgoing
//! responses, and flushes response caches after every successful save.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌────────────────────────────────────────────────┐
//!                 │            HEADER SETTINGS SERVICE             │
//!                 │                                                │
//!   Admin client  │  ┌─────────┐   ┌─────────┐   ┌─────────────┐  │
//!   ──────────────┼─▶│  http   │──▶│  admin  │──▶│   editor    │  │
//!                 │  │ server  │   │  auth   │   │ load/submit │  │
//!                 │  └─────────┘   └─────────┘   └──────┬──────┘  │
//!                 │       ▲                             │         │
//!                 │       │ response headers    ┌───────▼──────┐  │
//!                 │  ┌────┴────┐                │    store     │  │
//!                 │  │  apply  │◀── live doc ───│ (file / mem) │  │
//!                 │  └─────────┘                └───────┬──────┘  │
//!                 │                                     │         │
//!                 │                             ┌───────▼──────┐  │
//!                 │                             │ cache flush  │  │
//!                 │                             └──────────────┘  │
//!                 └────────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod editor;
pub mod headers;
pub mod store;

// Service surface
pub mod admin;
pub mod http;

// Cross-cutting concerns
pub mod cache;
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use editor::{HeaderSettingsEditor, SubmitError};
pub use headers::{HeaderName, Section, SettingsDocument, SETTINGS_KEY};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::{FileStore, MemoryStore, SettingsStore, StoreError};
