//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router: admin settings API plus /health
//! - Wire up middleware (tracing, timeout, request ID, response headers)
//! - Hold the shared application state
//! - Serve with graceful shutdown

use arc_swap::ArcSwap;
use axum::{middleware, routing::get, Json, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::admin;
use crate::cache::CacheFlush;
use crate::config::AppConfig;
use crate::editor::HeaderSettingsEditor;
use crate::headers::{SettingsDocument, SETTINGS_KEY};
use crate::http::apply::apply_response_headers;
use crate::http::request_id::propagate_request_id;
use crate::store::SettingsStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub editor: Arc<HeaderSettingsEditor>,
    /// Snapshot of the persisted document, read by the response-header
    /// middleware and refreshed after every successful submit.
    pub live: Arc<ArcSwap<SettingsDocument>>,
    pub api_key: String,
}

/// HTTP server for the header settings service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new server over the given store and cache-flush signal.
    pub fn new(
        config: AppConfig,
        store: Arc<dyn SettingsStore>,
        cache: Arc<dyn CacheFlush>,
    ) -> Self {
        let initial = match store.load(SETTINGS_KEY) {
            Ok(document) => document.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Could not read persisted header settings, starting with empty values"
                );
                SettingsDocument::default()
            }
        };

        let state = AppState {
            editor: Arc::new(HeaderSettingsEditor::new(store, cache)),
            live: Arc::new(ArcSwap::from_pointee(initial)),
            api_key: config.admin.api_key.clone(),
        };

        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/health", get(health))
            .merge(admin::admin_router(state.clone()))
            .layer(
                // Outermost first: tracing wraps everything, the response
                // headers go on just before the handlers.
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(middleware::from_fn(propagate_request_id))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.listener.request_timeout_secs,
                    )))
                    .layer(middleware::from_fn_with_state(state, apply_response_headers)),
            )
    }

    /// Run the server until Ctrl+C or a shutdown broadcast.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Header settings service starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = shutdown.recv() => {}
                }
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("Header settings service stopped");
        Ok(())
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
