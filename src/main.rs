//! Simple Items API server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server ──▶ routing::router ──▶ validation::extract
//!                     (request id,      (method + path     (FieldSpec schemas,
//!                      trace, limits)    template)          coercion)
//!                                                                │
//!                                              ┌─────────────────┴──────────┐
//!                                              ▼                            ▼
//!                                      routing::handlers            ValidationError
//!                                              │                        (422)
//!     Client Response                          ▼
//!     ◀────────────── JSON serialization ◀── models
//!
//!     docs: /openapi.json, /docs, /redoc (generated at startup)
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use simple_items_api::config::resolve_config;
use simple_items_api::lifecycle::{wait_for_signal, Shutdown};
use simple_items_api::observability::{logging, metrics};
use simple_items_api::HttpServer;

#[derive(Parser)]
#[command(name = "simple-items-api")]
#[command(about = "Simple item service with generated API documentation", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address (default 0.0.0.0:8000).
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = resolve_config(args.config.as_deref(), args.bind)?;

    logging::init_logging(&config.observability)?;

    tracing::info!("simple-items-api v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_size = config.security.max_body_size,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    let server_shutdown = shutdown.subscribe();

    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        wait_for_signal().await;
        signal_shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
