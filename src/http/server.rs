//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with API and documentation routes
//! - Wire up middleware (request ID, tracing, timeout, body limit, metrics)
//! - Serve on a bound listener until shutdown is signalled

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::{HeaderMap, Request, Uri},
    middleware, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::Span;

use crate::config::ServiceConfig;
use crate::docs::{docs_routes, DocsError};
use crate::http::request::{request_id, MakeRequestUuid};
use crate::http::response::{method_not_allowed, nosniff_layer};
use crate::observability::metrics;
use crate::routing::{api_routes, redirect_slashes, RouteTable, API_PATHS};

/// HTTP server for the item service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// The configuration is expected to have passed `validate_config`.
    pub fn new(config: ServiceConfig) -> Result<Self, DocsError> {
        let router = Self::build_router(&config)?;
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig) -> Result<Router, DocsError> {
        let mut router = api_routes();
        let mut paths: Vec<String> = API_PATHS.iter().map(ToString::to_string).collect();
        if config.docs.enabled {
            router = router.merge(docs_routes(&config.docs)?);
            paths.extend([
                config.docs.openapi_url.clone(),
                config.docs.docs_url.clone(),
                config.docs.redoc_url.clone(),
            ]);
        }

        let routes = Arc::new(RouteTable::new(paths));
        let mut router = router
            .method_not_allowed_fallback(method_not_allowed)
            .fallback(move |uri: Uri, headers: HeaderMap| {
                redirect_slashes(routes.clone(), uri, headers)
            })
            .layer(middleware::from_fn(metrics::track_requests));

        if config.security.enable_headers {
            router = router.layer(nosniff_layer());
        }

        Ok(router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid)))
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires. In-flight requests are drained before returning.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            docs_enabled = self.config.docs.enabled,
            "HTTP server starting"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// A handle to the fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

fn make_request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id(request),
    )
}
