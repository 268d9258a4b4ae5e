//! Declarative field constraint descriptors.

use serde::de::DeserializeOwned;

/// Where a field is read from in the inbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Path,
    Query,
    Body,
}

impl Location {
    /// Name used as the first segment of an error `loc`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Path => "path",
            Location::Query => "query",
            Location::Body => "body",
        }
    }
}

/// Value type a field is coerced into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    /// Floating-point number.
    Number,
    /// Signed 64-bit integer.
    Integer,
}

/// A single field constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub location: Location,
    pub kind: FieldKind,
    pub required: bool,
    /// Minimum character count, only meaningful for string fields.
    pub min_length: Option<usize>,
}

impl FieldSpec {
    /// A field that must be present.
    pub const fn required(name: &'static str, location: Location, kind: FieldKind) -> Self {
        Self {
            name,
            location,
            kind,
            required: true,
            min_length: None,
        }
    }

    /// A field that defaults to null when absent.
    pub const fn optional(name: &'static str, location: Location, kind: FieldKind) -> Self {
        Self {
            name,
            location,
            kind,
            required: false,
            min_length: None,
        }
    }

    pub const fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }
}

/// A record whose fields are described by a static list of [`FieldSpec`]s.
///
/// The validated field map is deserialized into `Self`, so `FIELDS` must
/// name every field of the struct.
pub trait Schema: DeserializeOwned {
    const FIELDS: &'static [FieldSpec];
}
