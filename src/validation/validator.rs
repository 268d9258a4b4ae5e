//! Uniform evaluation of [`FieldSpec`] descriptors against request input.
//!
//! # Coercion rules
//! - `String`: JSON strings only.
//! - `Number`: JSON numbers, or strings that parse as a finite float.
//! - `Integer`: JSON integers, floats without a fractional part, or strings
//!   that parse as a base-10 `i64`.
//! - Booleans are never accepted as numbers.

use serde_json::{Map, Number, Value};

use crate::validation::error::{ErrorDetail, ValidationError};
use crate::validation::schema::{FieldKind, FieldSpec, Location, Schema};

/// Raw input maps, one per request location.
#[derive(Debug, Default, Clone)]
pub struct Inputs {
    pub path: Map<String, Value>,
    pub query: Map<String, Value>,
    pub body: Map<String, Value>,
}

impl Inputs {
    /// Inputs for a schema read entirely from a JSON object body.
    pub fn body(body: Map<String, Value>) -> Self {
        Self {
            body,
            ..Self::default()
        }
    }

    fn source(&self, location: Location) -> &Map<String, Value> {
        match location {
            Location::Path => &self.path,
            Location::Query => &self.query,
            Location::Body => &self.body,
        }
    }

    /// The `input` reported for a missing field: the whole body object for
    /// body fields, null otherwise.
    fn missing_input(&self, location: Location) -> Value {
        match location {
            Location::Body => Value::Object(self.body.clone()),
            Location::Path | Location::Query => Value::Null,
        }
    }
}

/// A coercion failure: `(type, message)`.
type Violation = (&'static str, String);

/// Validate and coerce `inputs` against `T::FIELDS`, then build a `T`.
pub fn validate<T: Schema>(inputs: &Inputs) -> Result<T, ValidationError> {
    let fields = validate_fields(T::FIELDS, inputs)?;

    serde_json::from_value(Value::Object(fields)).map_err(|e| {
        // Only reachable when FIELDS and the struct disagree.
        tracing::error!(error = %e, "Validated fields do not match record type");
        ValidationError::single(
            ErrorDetail::new("model_type", Vec::new(), "Input could not be converted", Value::Null)
                .with_context(e.to_string()),
        )
    })
}

/// Evaluate every descriptor, collecting all failures.
///
/// On success the returned map holds every declared field, with absent
/// optional fields set to null.
pub fn validate_fields(
    fields: &[FieldSpec],
    inputs: &Inputs,
) -> Result<Map<String, Value>, ValidationError> {
    let mut output = Map::new();
    let mut errors = Vec::new();

    for spec in fields {
        let raw = inputs.source(spec.location).get(spec.name);

        match (raw, spec.required) {
            (None, true) => errors.push(ErrorDetail::field(
                spec.location,
                spec.name,
                "missing",
                "Field required",
                inputs.missing_input(spec.location),
            )),
            (None, false) | (Some(Value::Null), false) => {
                output.insert(spec.name.to_string(), Value::Null);
            }
            (Some(value), _) => match coerce(spec, value) {
                Ok(coerced) => {
                    output.insert(spec.name.to_string(), coerced);
                }
                Err((kind, msg)) => errors.push(ErrorDetail::field(
                    spec.location,
                    spec.name,
                    kind,
                    &msg,
                    value.clone(),
                )),
            },
        }
    }

    if errors.is_empty() {
        Ok(output)
    } else {
        Err(ValidationError::new(errors))
    }
}

fn coerce(spec: &FieldSpec, value: &Value) -> Result<Value, Violation> {
    match spec.kind {
        FieldKind::String => coerce_string(value, spec.min_length),
        FieldKind::Number => coerce_number(value),
        FieldKind::Integer => coerce_integer(value),
    }
}

fn coerce_string(value: &Value, min_length: Option<usize>) -> Result<Value, Violation> {
    let Value::String(s) = value else {
        return Err(("string_type", "Input should be a valid string".to_string()));
    };

    if let Some(min) = min_length {
        if s.chars().count() < min {
            let plural = if min == 1 { "" } else { "s" };
            return Err((
                "string_too_short",
                format!("String should have at least {min} character{plural}"),
            ));
        }
    }

    Ok(value.clone())
}

fn coerce_number(value: &Value) -> Result<Value, Violation> {
    match value {
        Value::Number(_) => Ok(value.clone()),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| {
                (
                    "float_parsing",
                    "Input should be a valid number, unable to parse string as a number"
                        .to_string(),
                )
            }),
        _ => Err(("float_type", "Input should be a valid number".to_string())),
    }
}

fn coerce_integer(value: &Value) -> Result<Value, Violation> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(Value::from(i));
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                    Ok(Value::from(f as i64))
                }
                Some(f) if f.fract() != 0.0 => Err((
                    "int_from_float",
                    "Input should be a valid integer, got a number with a fractional part"
                        .to_string(),
                )),
                _ => Err(("int_type", "Input should be a valid integer".to_string())),
            }
        }
        Value::String(s) => s.trim().parse::<i64>().map(Value::from).map_err(|_| {
            (
                "int_parsing",
                "Input should be a valid integer, unable to parse string as an integer"
                    .to_string(),
            )
        }),
        _ => Err(("int_type", "Input should be a valid integer".to_string())),
    }
}
