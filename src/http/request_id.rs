//! Request-ID middleware.
//!
//! Assigns a UUID v4 `x-request-id` to requests that arrive without one and
//! echoes the ID on the response so clients and logs can correlate.

use axum::{
    extract::Request,
    http::{header::HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn propagate_request_id(mut request: Request, next: Next) -> Response {
    let header = HeaderName::from_static(REQUEST_ID_HEADER);

    let id = request
        .headers()
        .get(&header)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    if let Ok(value) = HeaderValue::from_str(&id) {
        request.headers_mut().insert(header.clone(), value.clone());
        let mut response = next.run(request).await;
        response.headers_mut().insert(header, value);
        return response;
    }

    // Unparseable inbound ID; proceed without one rather than reject.
    next.run(request).await
}
