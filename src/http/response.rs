//! Response shaping shared by every route.
//!
//! # Responsibilities
//! - JSON bodies for unmatched routes and unsupported methods
//! - Security response headers

use axum::{
    http::{header, HeaderValue, StatusCode},
    Json,
};
use serde_json::{json, Value};
use tower_http::set_header::SetResponseHeaderLayer;

/// Fallback for requests that match no route.
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({"detail": "Not Found"})))
}

/// Fallback for a path that exists but not for the request method.
pub async fn method_not_allowed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({"detail": "Method Not Allowed"})),
    )
}

/// Adds `X-Content-Type-Options: nosniff` unless a handler already set it.
pub fn nosniff_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    )
}
