//! Models - schema-validated CRUD over hash-stored records.
//!
//! A model binds a name and a schema to a store handle and exposes
//! create/find/update/delete plus a linear-scan query API. Each record is
//! a flat string hash at `<model>:<id>`; the `<model>:all` set registers
//! every live id and is the sole enumeration mechanism, so every query is
//! a full scan followed by in-process filtering.
//!
//! ## Example
//!
//! ```ignore
//! use redmap::{FieldType, Fields, FindOptions, InMemoryStore, Model, Query, Schema};
//!
//! let users = Model::new(
//!     InMemoryStore::new(),
//!     "user",
//!     Schema::new()
//!         .field("name", FieldType::String)
//!         .field("age", FieldType::Number),
//! );
//!
//! let john = users
//!     .create(&Fields::new().set("name", "John").set("age", 30))
//!     .await?;
//! let adults = users
//!     .find(
//!         &Query::new().gte("age", 25),
//!         &FindOptions::new().sort("age:desc").limit(10),
//!     )
//!     .await?;
//! ```

mod model;
mod report;

use std::collections::HashMap;

/// One stored record: its flat field-to-value mapping, `id` included.
/// Every value comes back from the store as a string.
pub type Record = HashMap<String, String>;

pub use model::Model;
pub use report::{BatchFailure, DeleteReport, UpdateReport};
