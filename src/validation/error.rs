//! Validation failures and their HTTP representation.

use axum::{
    extract::rejection::{BytesRejection, QueryRejection, RawPathParamsRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;

use crate::validation::schema::Location;

/// One segment of an error location: a field name or a byte offset.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum LocSegment {
    Key(String),
    Index(usize),
}

impl From<&str> for LocSegment {
    fn from(key: &str) -> Self {
        LocSegment::Key(key.to_string())
    }
}

impl From<usize> for LocSegment {
    fn from(index: usize) -> Self {
        LocSegment::Index(index)
    }
}

/// Extra detail attached to decode failures.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ErrorContext {
    pub error: String,
}

/// A single violation found while validating a request.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable violation type, e.g. `missing` or `float_parsing`.
    #[serde(rename = "type")]
    pub kind: String,
    pub loc: Vec<LocSegment>,
    pub msg: String,
    /// The offending input value.
    #[schema(value_type = Object)]
    pub input: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctx: Option<ErrorContext>,
}

impl ErrorDetail {
    pub fn new(kind: &str, loc: Vec<LocSegment>, msg: &str, input: Value) -> Self {
        Self {
            kind: kind.to_string(),
            loc,
            msg: msg.to_string(),
            input,
            ctx: None,
        }
    }

    /// A violation on a named field at `location`.
    pub fn field(location: Location, field: &str, kind: &str, msg: &str, input: Value) -> Self {
        Self::new(kind, vec![location.as_str().into(), field.into()], msg, input)
    }

    pub fn with_context(mut self, error: impl Into<String>) -> Self {
        self.ctx = Some(ErrorContext { error: error.into() });
        self
    }
}

/// Every violation found in a request, in schema declaration order.
///
/// Rendered as `422 Unprocessable Entity` with body `{"detail": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Error, ToSchema)]
#[error("request failed validation with {} error(s)", .detail.len())]
pub struct ValidationError {
    pub detail: Vec<ErrorDetail>,
}

impl ValidationError {
    pub fn new(detail: Vec<ErrorDetail>) -> Self {
        Self { detail }
    }

    pub fn single(detail: ErrorDetail) -> Self {
        Self { detail: vec![detail] }
    }

    pub fn errors(&self) -> &[ErrorDetail] {
        &self.detail
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!(errors = self.detail.len(), "Rejecting request with validation errors");
        (StatusCode::UNPROCESSABLE_ENTITY, Json(self)).into_response()
    }
}

/// Rejection produced by the validating extractors.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Path segments that are not valid UTF-8 after percent-decoding.
    #[error(transparent)]
    Path(#[from] RawPathParamsRejection),

    /// A query string that cannot be decoded at all.
    #[error(transparent)]
    Query(#[from] QueryRejection),

    /// The body could not be read (too large, connection aborted).
    #[error(transparent)]
    Body(#[from] BytesRejection),
}

impl IntoResponse for ExtractError {
    fn into_response(self) -> Response {
        match self {
            ExtractError::Validation(e) => e.into_response(),
            ExtractError::Path(e) => e.into_response(),
            ExtractError::Query(e) => e.into_response(),
            ExtractError::Body(e) => e.into_response(),
        }
    }
}
