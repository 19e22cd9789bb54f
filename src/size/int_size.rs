use core::fmt;

use log::{trace, warn};
use serde::Deserialize;
use serde_json::{Map, Number, Value};

use super::{json_kind, FloatSize, SizeError};

/// The dimensions of a layer or tile in whole pixels.
///
/// Components are not required to be positive, but every producer in the
/// graphics layers only ever hands out non-negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "Value")]
pub struct IntSize {
    width: i32,
    height: i32,
}

impl IntSize {
    /// Create an `IntSize` from its components, stored as is.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Round each component of a [`FloatSize`] to the nearest integer.
    ///
    /// Halfway values are rounded away from zero, so `2.5` gives `3` and
    /// `-2.5` gives `-3`. Values out of the `i32` range saturate and `NaN`
    /// gives `0`.
    #[must_use]
    pub fn from_float_size(size: FloatSize) -> Self {
        Self {
            width: round_to_i32(size.width()),
            height: round_to_i32(size.height()),
        }
    }

    /// Read a size from a JSON object with `width` and `height` fields.
    /// Other fields are ignored.
    ///
    /// A field is read as an integer when it is a JSON number, or a string
    /// holding a number. Fractional values are truncated toward zero, so
    /// `20.5`, `"20.5"` and `2e1` all give `20`.
    ///
    /// # Errors
    ///
    /// Will return [`SizeError::NotAnObject`] if `value` is not a JSON object,
    /// [`SizeError::MissingField`] if a field is absent, and
    /// [`SizeError::InvalidField`] if a field holds anything else than a finite
    /// number within the `i32` range once truncated.
    #[profiling::function]
    pub fn from_serialized(value: &Value) -> Result<Self, SizeError> {
        let object = value.as_object().ok_or_else(|| SizeError::NotAnObject {
            found: json_kind(value),
        })?;
        let size = Self {
            width: int_field(object, "width")?,
            height: int_field(object, "height")?,
        };
        trace!("deserialized size {size}");
        Ok(size)
    }

    /// Parse a JSON text and read a size from it, see [`Self::from_serialized`].
    ///
    /// # Errors
    ///
    /// Will return [`SizeError::Deserialization`] if the text is not valid JSON,
    /// or any error of [`Self::from_serialized`].
    #[profiling::function]
    pub fn from_json_str(json: &str) -> Result<Self, SizeError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_serialized(&value)
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(self) -> i32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(self) -> i32 {
        self.height
    }

    /// Multiply both components by `factor` and round them the same way
    /// as [`Self::from_float_size`].
    #[must_use]
    pub fn scale(self, factor: f32) -> Self {
        if !factor.is_finite() {
            warn!("scaling size {self} by non finite factor {factor}");
        }
        Self::from_float_size(FloatSize::from(self).scale(factor))
    }
}

// `as` saturates on overflow and maps NaN to 0.
fn round_to_i32(value: f32) -> i32 {
    value.round() as i32
}

fn int_field(object: &Map<String, Value>, field: &'static str) -> Result<i32, SizeError> {
    let value = object.get(field).ok_or(SizeError::MissingField { field })?;
    let int = match value {
        Value::Number(number) => number_to_i32(number),
        Value::String(text) => text.trim().parse::<f64>().ok().and_then(truncate_to_i32),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    };
    int.ok_or_else(|| SizeError::InvalidField {
        field,
        value: value.to_string(),
    })
}

fn number_to_i32(number: &Number) -> Option<i32> {
    if let Some(int) = number.as_i64() {
        return i32::try_from(int).ok();
    }
    number.as_f64().and_then(truncate_to_i32)
}

// Fails on NaN, infinities and values out of the `i32` range.
fn truncate_to_i32(value: f64) -> Option<i32> {
    cast::i32(value.trunc()).ok()
}

impl From<(i32, i32)> for IntSize {
    fn from((width, height): (i32, i32)) -> Self {
        Self::new(width, height)
    }
}

impl From<FloatSize> for IntSize {
    fn from(size: FloatSize) -> Self {
        Self::from_float_size(size)
    }
}

impl TryFrom<&Value> for IntSize {
    type Error = SizeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_serialized(value)
    }
}

impl TryFrom<Value> for IntSize {
    type Error = SizeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_serialized(&value)
    }
}

impl fmt::Display for IntSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.width, self.height)
    }
}
