//! Request and response records.
//!
//! Every record here is transient: built from one request, serialized into
//! its response, then dropped. Field order in each struct is the order
//! fields appear in the JSON output.

pub mod item;
pub mod status;

pub use item::{Item, ItemQuery};
pub use status::{HealthStatus, Message};
