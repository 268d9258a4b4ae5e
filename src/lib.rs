//! Simple Items API
//!
//! A small HTTP service with a root greeting, a health check, item lookup
//! and item creation. Every input is validated against a declarative field
//! schema before a handler runs; failures come back as a structured 422.
//! An OpenAPI document plus Swagger UI and ReDoc views are generated from
//! the same handlers and records.

pub mod config;
pub mod docs;
pub mod http;
pub mod lifecycle;
pub mod models;
pub mod observability;
pub mod routing;
pub mod validation;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
