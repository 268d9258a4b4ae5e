//! Axum extractors that run the validator before a handler is invoked.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, RawPathParams, Request},
    http::{header, request::Parts, HeaderMap},
};
use serde_json::{json, Map, Value};

use crate::validation::error::{ErrorDetail, ExtractError, LocSegment, ValidationError};
use crate::validation::schema::{FieldSpec, Location, Schema};
use crate::validation::validator::{validate, Inputs};

/// Path and query parameters validated against `T::FIELDS`.
///
/// Path values arrive as strings and are coerced per field kind. A repeated
/// query key keeps its last value.
#[derive(Debug, Clone)]
pub struct ValidatedParams<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedParams<T>
where
    T: Schema + Send,
    S: Send + Sync,
{
    type Rejection = ExtractError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let mut inputs = Inputs::default();

        if reads_from(T::FIELDS, Location::Path) {
            let params = RawPathParams::from_request_parts(parts, state).await?;
            for (key, value) in &params {
                inputs
                    .path
                    .insert(key.to_string(), Value::String(value.to_string()));
            }
        }

        if reads_from(T::FIELDS, Location::Query) {
            let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)?;
            for (key, value) in pairs {
                inputs.query.insert(key, Value::String(value));
            }
        }

        Ok(Self(validate::<T>(&inputs)?))
    }
}

/// A JSON object body validated against `T::FIELDS`.
///
/// The body is decoded as JSON when `Content-Type` is absent or names a JSON
/// media type. Any other non-empty body is kept raw and fails as a
/// non-object input.
#[derive(Debug, Clone)]
pub struct ValidatedBody<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedBody<T>
where
    T: Schema + Send,
    S: Send + Sync,
{
    type Rejection = ExtractError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = is_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state).await?;
        if !json && !bytes.is_empty() {
            return Err(raw_body_error(&bytes).into());
        }
        let body = parse_body(&bytes)?;

        Ok(Self(validate::<T>(&Inputs::body(body))?))
    }
}

fn reads_from(fields: &[FieldSpec], location: Location) -> bool {
    fields.iter().any(|f| f.location == location)
}

/// True for a missing or empty `Content-Type`, `application/json`, and
/// `application/*+json`. Parameters such as `charset` are ignored.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return true;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };
    if value.trim().is_empty() {
        return true;
    }

    let essence = value.split(';').next().unwrap_or_default().trim();
    match essence.split_once('/') {
        Some((kind, subtype)) => {
            let subtype = subtype.trim().to_ascii_lowercase();
            kind.trim().eq_ignore_ascii_case("application")
                && (subtype == "json" || subtype.ends_with("+json"))
        }
        None => false,
    }
}

const NOT_AN_OBJECT: &str = "Input should be a valid dictionary or object to extract fields from";

/// A body sent under a non-JSON media type.
fn raw_body_error(bytes: &[u8]) -> ValidationError {
    ValidationError::single(ErrorDetail::new(
        "model_attributes_type",
        vec!["body".into()],
        NOT_AN_OBJECT,
        Value::String(String::from_utf8_lossy(bytes).into_owned()),
    ))
}

/// Decode a request body into a JSON object.
pub fn parse_body(bytes: &[u8]) -> Result<Map<String, Value>, ValidationError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ValidationError::single(ErrorDetail::new(
            "missing",
            vec!["body".into()],
            "Field required",
            Value::Null,
        )));
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ValidationError::single(ErrorDetail::new(
            "model_attributes_type",
            vec!["body".into()],
            NOT_AN_OBJECT,
            other,
        ))),
        Err(e) => {
            let offset = byte_offset(bytes, e.line(), e.column());
            Err(ValidationError::single(
                ErrorDetail::new(
                    "json_invalid",
                    vec!["body".into(), LocSegment::Index(offset)],
                    "JSON decode error",
                    json!({}),
                )
                .with_context(e.to_string()),
            ))
        }
    }
}

/// Convert serde_json's 1-based line/column into a byte offset.
fn byte_offset(bytes: &[u8], line: usize, column: usize) -> usize {
    let line_start: usize = bytes
        .split(|b| *b == b'\n')
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum();
    (line_start + column.saturating_sub(1)).min(bytes.len())
}
