mod error;
mod model;
mod query;
mod schema;
mod store;
mod value;

pub use error::ModelError;
pub use model::{BatchFailure, DeleteReport, Model, Record, UpdateReport};
pub use query::{Filter, FilterOp, FindOptions, Query, Sort, SortDirection};
pub use schema::{FieldType, Schema, ValidationError};
pub use store::{HashStore, InMemoryStore, RedisStore, StoreError};
pub use value::{Fields, Value};

// Re-export the connection handle type so callers can construct a
// RedisStore without depending on the redis crate directly.
pub use redis::aio::ConnectionManager;
