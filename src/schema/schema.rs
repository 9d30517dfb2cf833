use std::collections::BTreeMap;
use std::fmt;

use super::FieldType;
use crate::value::Fields;

/// A mapping from field name to declared primitive type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: BTreeMap<String, FieldType>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field, replacing any existing declaration under the same
    /// name.
    pub fn field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.fields.insert(name.into(), field_type);
        self
    }

    /// The declared type of a field, if any.
    pub fn field_type(&self, name: &str) -> Option<FieldType> {
        self.fields.get(name).copied()
    }

    /// Filter `data` down to declared fields, rendered to their stored
    /// string form.
    ///
    /// Undeclared fields are dropped, not errors. A declared field whose
    /// value type does not match its declaration fails the whole call with
    /// an error naming the field.
    pub fn validate(&self, data: &Fields) -> Result<Vec<(String, String)>, ValidationError> {
        let mut accepted = Vec::with_capacity(data.len());
        for (name, value) in data.iter() {
            let Some(declared) = self.fields.get(name) else {
                continue;
            };
            let actual = value.field_type();
            if actual != *declared {
                return Err(ValidationError::TypeMismatch {
                    field: name.clone(),
                    expected: *declared,
                    actual,
                });
            }
            accepted.push((name.clone(), value.to_stored()));
        }
        Ok(accepted)
    }
}

/// Error raised at the validation boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A declared field was given a value of the wrong type.
    TypeMismatch {
        field: String,
        expected: FieldType,
        actual: FieldType,
    },
}

impl ValidationError {
    /// The field the error names.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::TypeMismatch { field, .. } => field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::TypeMismatch {
                field,
                expected,
                actual,
            } => write!(
                f,
                "invalid type for field {}: expected {}, got {}",
                field, expected, actual
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
