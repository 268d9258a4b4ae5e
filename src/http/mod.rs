//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum::serve, middleware stack)
//!     → request.rs (assign or propagate X-Request-ID)
//!     → [routing + validation]
//!     → response.rs (fallback body, security headers)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{request_id, MakeRequestUuid, X_REQUEST_ID};
pub use server::HttpServer;
