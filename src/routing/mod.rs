//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path, query, body)
//!     → router.rs (route table lookup by method + path template)
//!     → validation extractors (coerce params, decode body)
//!     → handlers.rs (build response record)
//!     → JSON serialization (200) or ValidationError (422)
//! ```
//!
//! # Design Decisions
//! - Route table built once at startup, immutable at runtime
//! - Handlers are pure functions of their validated input
//! - Unmatched paths fall through to slashes.rs: a 307 to the slash-toggled
//!   path when that path is routable, the JSON 404 otherwise

pub mod handlers;
pub mod router;
pub mod slashes;

pub use router::{api_routes, API_PATHS};
pub use slashes::{redirect_slashes, RouteTable};
