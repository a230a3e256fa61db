//! Field values and their coercion to a field's declared kind

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Flat record of field values keyed by field name
pub type FormValues = BTreeMap<String, FieldValue>;

/// A single input's current value
///
/// Deserializes from any JSON scalar. Whole numbers serialize as JSON
/// integers so a record round-trips the way a user typed it (`30`, not `30.0`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Text(s.into())
    }

    /// True for the empty string; whitespace is a value
    pub fn is_empty_text(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.is_empty())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) if is_whole(*n) => write!(f, "{}", *n as i64),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::Number(n) if is_whole(*n) => serializer.serialize_i64(*n as i64),
            FieldValue::Number(n) => serializer.serialize_f64(*n),
            FieldValue::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(f64::from(n))
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

fn is_whole(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64
}

/// Declared type of a field, deciding how raw values are read before rules run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Boolean,
}

/// Raised when a value cannot be read as its field's kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindMismatch;

/// A value after coercion to its field's kind
#[derive(Debug, Clone, PartialEq)]
pub enum Coerced {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl FieldKind {
    /// Coerce a raw value to this kind
    ///
    /// `Ok(None)` means the value is absent (missing or the empty string).
    /// `Err(KindMismatch)` means the value cannot be read as this kind.
    pub fn coerce(self, value: Option<&FieldValue>) -> Result<Option<Coerced>, KindMismatch> {
        let value = match value {
            None => return Ok(None),
            Some(v) if v.is_empty_text() => return Ok(None),
            Some(v) => v,
        };

        match (self, value) {
            (FieldKind::Text, v) => Ok(Some(Coerced::Text(v.to_string()))),
            (FieldKind::Number, FieldValue::Number(n)) if n.is_finite() => {
                Ok(Some(Coerced::Number(*n)))
            }
            (FieldKind::Number, FieldValue::Text(s)) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(|n| Some(Coerced::Number(n)))
                .ok_or(KindMismatch),
            (FieldKind::Boolean, FieldValue::Bool(b)) => Ok(Some(Coerced::Bool(*b))),
            (FieldKind::Boolean, FieldValue::Text(s)) => match s.trim() {
                "true" => Ok(Some(Coerced::Bool(true))),
                "false" => Ok(Some(Coerced::Bool(false))),
                _ => Err(KindMismatch),
            },
            _ => Err(KindMismatch),
        }
    }
}
