//! Fixed response payloads.

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Message {
    #[schema(example = "Hello, World!")]
    pub message: String,
}

impl Message {
    pub fn hello() -> Self {
        Self {
            message: "Hello, World!".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "healthy")]
    pub status: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}
