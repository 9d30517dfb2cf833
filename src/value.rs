//! Scalar values - the shapes a field or query operand can take.
//!
//! Records live in the store as flat string hashes, so every value is
//! rendered to its stored string form on write and comes back as a string
//! on read. [`Value`] is the typed form used on the way in: input data and
//! query operands.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::FieldType;

/// A scalar value: a string or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    Num(f64),
}

impl Value {
    /// The schema type this value satisfies.
    pub fn field_type(&self) -> FieldType {
        match self {
            Value::Str(_) => FieldType::String,
            Value::Num(_) => FieldType::Number,
        }
    }

    /// Render the value as it is written to the store. Numbers use their
    /// shortest decimal form, so `31.0` is stored as `"31"`.
    pub fn to_stored(&self) -> String {
        match self {
            Value::Str(s) => s.clone(),
            Value::Num(n) => n.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{}", s),
            Value::Num(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Num(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Num(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Num(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Num(f64::from(n))
    }
}

/// Lenient numeric coercion applied to stored strings by the ordering
/// operators and the sorter: empty or whitespace-only input coerces to
/// zero, anything unparsable to NaN (which never satisfies a comparison).
pub(crate) fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// An ordered set of named input fields, built up for `create` and update
/// calls.
///
/// Fields not declared in the model's schema are dropped (silently) at the
/// validation boundary, not stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fields(BTreeMap<String, Value>);

impl Fields {
    /// Create an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any existing value under the same name.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Iterate fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_store_in_shortest_form() {
        assert_eq!(Value::Num(31.0).to_stored(), "31");
        assert_eq!(Value::Num(30.5).to_stored(), "30.5");
        assert_eq!(Value::Num(-2.0).to_stored(), "-2");
    }

    #[test]
    fn strings_store_verbatim() {
        assert_eq!(Value::from("John").to_stored(), "John");
        assert_eq!(Value::from("30").field_type(), FieldType::String);
    }

    #[test]
    fn coercion_handles_blank_and_garbage() {
        assert_eq!(coerce_number("30"), 30.0);
        assert_eq!(coerce_number(" 42 "), 42.0);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("   "), 0.0);
        assert!(coerce_number("abc").is_nan());
    }

    #[test]
    fn fields_replace_on_reuse() {
        let fields = Fields::new().set("age", 30).set("age", 31);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("age"), Some(&Value::Num(31.0)));
    }
}
