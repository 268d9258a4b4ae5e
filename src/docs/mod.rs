//! API documentation subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     handler annotations + ToSchema records
//!     → openapi.rs (ApiDoc, info from DocsConfig)
//!     → rendered once to JSON bytes
//!     → ui.rs (Swagger UI and ReDoc pages pointing at the JSON URL)
//!
//! Per request:
//!     GET {openapi_url} / {docs_url} / {redoc_url} → pre-rendered bytes
//! ```
//!
//! # Design Decisions
//! - Read-only: nothing here affects routing or validation
//! - Rendered once, so every response is byte-identical

pub mod openapi;
pub mod ui;

use axum::{
    body::Bytes,
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use thiserror::Error;

use crate::config::DocsConfig;

pub use openapi::{build_openapi, ApiDoc};

/// Error type for documentation rendering.
#[derive(Debug, Error)]
pub enum DocsError {
    #[error("failed to render OpenAPI document: {0}")]
    Render(#[from] serde_json::Error),
}

/// Build the documentation routes described by `config`.
pub fn docs_routes(config: &DocsConfig) -> Result<Router, DocsError> {
    let document = Bytes::from(build_openapi(config).to_json()?);
    let swagger = Bytes::from(ui::swagger_ui_html(&config.title, &config.openapi_url));
    let redoc = Bytes::from(ui::redoc_html(&config.title, &config.openapi_url));

    tracing::debug!(
        openapi_url = %config.openapi_url,
        docs_url = %config.docs_url,
        redoc_url = %config.redoc_url,
        bytes = document.len(),
        "API documentation rendered"
    );

    Ok(Router::new()
        .route(
            &config.openapi_url,
            get(move || {
                let body = document.clone();
                async move { ([(header::CONTENT_TYPE, "application/json")], body).into_response() }
            }),
        )
        .route(
            &config.docs_url,
            get(move || {
                let page = swagger.clone();
                async move { Html(page) }
            }),
        )
        .route(
            &config.redoc_url,
            get(move || {
                let page = redoc.clone();
                async move { Html(page) }
            }),
        ))
}
