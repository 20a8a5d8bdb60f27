//! Applies the configured headers to outgoing responses.

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};

use crate::headers::HeaderName;
use crate::http::server::AppState;

/// Wire representation of a configurable header name.
fn wire_name(name: HeaderName) -> header::HeaderName {
    match name {
        HeaderName::ContentSecurityPolicy => header::CONTENT_SECURITY_POLICY,
        HeaderName::StrictTransportSecurity => header::STRICT_TRANSPORT_SECURITY,
        // The http crate carries no constant for the obsolete HPKP header.
        HeaderName::PublicKeyPins => header::HeaderName::from_static("public-key-pins"),
        HeaderName::XXssProtection => header::X_XSS_PROTECTION,
        HeaderName::XFrameOptions => header::X_FRAME_OPTIONS,
        HeaderName::XContentTypeOptions => header::X_CONTENT_TYPE_OPTIONS,
        HeaderName::CacheControl => header::CACHE_CONTROL,
    }
}

/// Set every non-empty configured header on the response.
///
/// Reads the live document snapshot; a submit that lands mid-request shows
/// up on the next response. Empty values are omitted entirely, matching the
/// "cleared field" semantics of the editor.
pub async fn apply_response_headers(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let document = state.live.load_full();
    let mut response = next.run(request).await;

    for (name, value) in document.non_empty() {
        match HeaderValue::from_str(value) {
            Ok(header_value) => {
                response.headers_mut().insert(wire_name(name), header_value);
            }
            Err(_) => {
                // Arbitrary text is accepted at edit time; values that are
                // not legal on the wire are skipped here instead.
                tracing::warn!(
                    header = name.as_str(),
                    "Configured value is not a valid HTTP header value, not sending"
                );
            }
        }
    }

    response
}
