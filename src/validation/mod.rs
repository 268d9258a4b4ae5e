//! Request validation subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → extract.rs (collect path params, query string, JSON body)
//!     → validator.rs (evaluate FieldSpec descriptors, coerce values)
//!         ├─ all fields valid → typed record handed to the handler
//!         └─ any failure      → ValidationError (422), handler never runs
//! ```
//!
//! # Design Decisions
//! - Schemas are static slices of per-field descriptors, evaluated uniformly
//! - Every failure is collected, not just the first
//! - Failures are reported in schema declaration order

pub mod error;
pub mod extract;
pub mod schema;
pub mod validator;

pub use error::{ErrorContext, ErrorDetail, ExtractError, LocSegment, ValidationError};
pub use extract::{ValidatedBody, ValidatedParams};
pub use schema::{FieldKind, FieldSpec, Location, Schema};
pub use validator::{validate, Inputs};
