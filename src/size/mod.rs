//! Module for size value types exchanged with the graphics layers.
//!
//! [`IntSize`] is the integer size handed around by layer and tile code,
//! [`FloatSize`] its floating point counterpart. An `IntSize` can also be read
//! from a JSON object carrying `width` and `height` integer fields.
mod float_size;
mod int_size;

pub use float_size::FloatSize;
pub use int_size::IntSize;

use serde_json::Value;
use thiserror::Error;

/// Error when reading a size from a serialized document.
#[derive(Debug, Error)]
pub enum SizeError {
    /// The serialized value is not a key/value object.
    #[error("Expected a JSON object for size, found {found}")]
    NotAnObject {
        /// Kind of JSON value found instead.
        found: &'static str,
    },

    /// A required field is absent.
    #[error("Missing size field '{field}'")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// A field cannot be read as an `i32`.
    #[error("Size field '{field}' is not an integer: {value}")]
    InvalidField {
        /// Name of the field.
        field: &'static str,
        /// The field value, as JSON text.
        value: String,
    },

    /// The JSON text itself is malformed.
    #[error("Failed to deserialize size: {0}")]
    Deserialization(#[from] serde_json::Error),
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
