//! Validated attributes.
//!
//! Every constrained field is written through the helpers here. A write
//! either commits the whole value or returns an error and leaves the old
//! value in place. Checks run in a fixed order: kind, then the write-once
//! lock, then range or shape.

use crate::error::{QuarryError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A field that may be written exactly once.
///
/// The lock is an explicit flag, independent of the stored value: a cell
/// holding `0` is just as locked as one holding `42`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WriteOnce<T> {
    value: Option<T>,
}

impl<T> Default for WriteOnce<T> {
    fn default() -> Self {
        Self { value: None }
    }
}

impl<T> WriteOnce<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Mutable access to the stored value. The lock only guards replacement.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    /// Store `value`, failing with a state error if a value is already held.
    pub fn set(&mut self, field: &str, value: T) -> Result<()> {
        if self.value.is_some() {
            return Err(QuarryError::state(field));
        }
        self.value = Some(value);
        Ok(())
    }
}

impl<T: Copy> WriteOnce<T> {
    pub fn copied(&self) -> Option<T> {
        self.value
    }
}

/// Reject NaN and infinities.
pub fn finite(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(QuarryError::value(field, "a finite number", value))
    }
}

pub fn non_negative(field: &str, value: f64) -> Result<f64> {
    let value = finite(field, value)?;
    if value < 0.0 {
        return Err(QuarryError::value(field, "non-negative", value));
    }
    Ok(value)
}

/// A probability in the closed interval [0, 1].
pub fn probability(field: &str, value: f64) -> Result<f64> {
    let value = finite(field, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(QuarryError::value(field, "within [0, 1]", value));
    }
    Ok(value)
}

/// A ceiling that must not lie below the current level.
pub fn ceiling(field: &str, value: f64, floor: f64) -> Result<f64> {
    let value = finite(field, value)?;
    if value < floor {
        return Err(QuarryError::value(
            field,
            format!("greater than or equal to food_reserve={}", floor),
            value,
        ));
    }
    Ok(value)
}

/// Minimum length for a string field.
pub fn min_len<'a>(field: &str, value: &'a str, min: usize) -> Result<&'a str> {
    if value.chars().count() < min {
        return Err(QuarryError::value(
            field,
            format!("at least {} characters long", min),
            format!("{:?} (length {})", value, value.chars().count()),
        ));
    }
    Ok(value)
}

/// Kind of a loosely typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Bool,
    Integer,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// The narrowest kind describing `value`.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(n) if n.is_i64() || n.is_u64() => JsonKind::Integer,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    /// Whether `value` is acceptable where this kind is expected.
    /// Integers are numbers.
    pub fn accepts(&self, value: &Value) -> bool {
        let actual = JsonKind::of(value);
        actual == *self || (*self == JsonKind::Number && actual == JsonKind::Integer)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "bool",
            JsonKind::Integer => "integer",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fail with a type error unless `value` is of kind `expected`.
pub fn expect_kind(field: &str, value: &Value, expected: JsonKind) -> Result<()> {
    if expected.accepts(value) {
        Ok(())
    } else {
        Err(QuarryError::type_mismatch(
            field,
            expected.as_str(),
            JsonKind::of(value).as_str(),
        ))
    }
}

pub fn expect_number(field: &str, value: &Value) -> Result<f64> {
    expect_kind(field, value, JsonKind::Number)?;
    value
        .as_f64()
        .ok_or_else(|| QuarryError::value(field, "representable as f64", value))
}

/// A non-negative integer. Negative integers are a range error, not a type error.
pub fn expect_count(field: &str, value: &Value) -> Result<u64> {
    expect_kind(field, value, JsonKind::Integer)?;
    value
        .as_u64()
        .ok_or_else(|| QuarryError::value(field, "non-negative", value))
}

pub fn expect_bool(field: &str, value: &Value) -> Result<bool> {
    expect_kind(field, value, JsonKind::Bool)?;
    Ok(value.as_bool().unwrap_or_default())
}

pub fn expect_str<'a>(field: &str, value: &'a Value) -> Result<&'a str> {
    expect_kind(field, value, JsonKind::String)?;
    Ok(value.as_str().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn write_once_locks_zero() {
        let mut cell = WriteOnce::new();
        cell.set("generation", 0u64).unwrap();
        let err = cell.set("generation", 5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StateKind);
        assert_eq!(cell.copied(), Some(0));
    }

    #[test]
    fn probability_bounds_are_inclusive() {
        assert_eq!(probability("p", 0.0).unwrap(), 0.0);
        assert_eq!(probability("p", 1.0).unwrap(), 1.0);
        assert_eq!(probability("p", 1.0001).unwrap_err().kind(), ErrorKind::ValueKind);
        assert_eq!(probability("p", -0.1).unwrap_err().kind(), ErrorKind::ValueKind);
        assert_eq!(probability("p", f64::NAN).unwrap_err().kind(), ErrorKind::ValueKind);
    }

    #[test]
    fn ceiling_must_cover_floor() {
        assert!(ceiling("max_food_reserve", 10.0, 10.0).is_ok());
        assert!(ceiling("max_food_reserve", 9.0, 10.0).is_err());
    }

    #[test]
    fn integers_count_as_numbers() {
        assert!(JsonKind::Number.accepts(&json!(3)));
        assert!(!JsonKind::Integer.accepts(&json!(3.5)));
        assert_eq!(JsonKind::of(&json!(true)), JsonKind::Bool);
    }

    #[test]
    fn count_distinguishes_type_from_range() {
        assert_eq!(expect_count("generation", &json!(4)).unwrap(), 4);
        assert_eq!(
            expect_count("generation", &json!(-1)).unwrap_err().kind(),
            ErrorKind::ValueKind
        );
        assert_eq!(
            expect_count("generation", &json!(1.5)).unwrap_err().kind(),
            ErrorKind::TypeKind
        );
        assert_eq!(
            expect_count("generation", &json!("3")).unwrap_err().kind(),
            ErrorKind::TypeKind
        );
    }

    #[test]
    fn min_len_counts_chars() {
        assert!(min_len("uuid", "abc", 3).is_ok());
        assert_eq!(min_len("uuid", "ab", 3).unwrap_err().kind(), ErrorKind::ValueKind);
    }
}
