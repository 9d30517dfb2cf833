//! Schemas - declared field types and the validation boundary.
//!
//! A schema maps field names to declared primitive types and is immutable
//! once the model is constructed. Validation filters an input map down to
//! the declared fields and rejects any value whose type does not match its
//! declaration, before anything is written.

mod field;
mod schema;

pub use field::FieldType;
pub use schema::{Schema, ValidationError};
