use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

use crate::editor::FormSpec;
use crate::headers::{HeaderName, SettingsDocument};
use crate::http::server::AppState;

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
}

pub async fn get_status() -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
    })
}

/// Current settings form: sections, fields, stored values, UI hints.
pub async fn get_headers(
    State(state): State<AppState>,
) -> Result<Json<FormSpec>, (StatusCode, String)> {
    match state.editor.load_view() {
        Ok(spec) => Ok(Json(spec)),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load header settings");
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                format!("Failed to load header settings: {}", e),
            ))
        }
    }
}

/// Submit the settings form.
///
/// The body maps canonical header names to values; headers missing from the
/// body are saved as empty strings (full overwrite). Responds with the
/// persisted document and refreshes the live snapshot used for outgoing
/// responses.
pub async fn put_headers(
    State(state): State<AppState>,
    Json(values): Json<HashMap<HeaderName, String>>,
) -> Result<Json<SettingsDocument>, (StatusCode, String)> {
    match state.editor.submit(&values) {
        Ok(document) => {
            state.live.store(Arc::new(document.clone()));
            Ok(Json(document))
        }
        Err(e) => {
            tracing::error!(error = %e, "Header settings submit failed");
            Err((StatusCode::SERVICE_UNAVAILABLE, e.to_string()))
        }
    }
}
