use std::fmt;

use crate::schema::ValidationError;
use crate::store::StoreError;

/// Error type for model operations.
///
/// Validation failures abort the enclosing call before any store write;
/// store failures propagate verbatim from the backend. Not-found
/// conditions are `None`/`false`/zero-count returns, never errors.
#[derive(Debug)]
pub enum ModelError {
    Validation(ValidationError),
    Store(StoreError),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::Validation(err) => write!(f, "{}", err),
            ModelError::Store(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::Validation(err) => Some(err),
            ModelError::Store(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ModelError {
    fn from(err: ValidationError) -> Self {
        ModelError::Validation(err)
    }
}

impl From<StoreError> for ModelError {
    fn from(err: StoreError) -> Self {
        ModelError::Store(err)
    }
}
