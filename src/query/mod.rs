//! Queries - field predicates, matching, and result shaping.
//!
//! A query maps field names to filters and matches a record when every
//! filter is satisfied (a conjunction). Filters evaluate against the
//! stored string form of the field: ordering operators coerce numerically,
//! strict equality does not (see [`Filter`] for the exact rules).
//! [`FindOptions`] shapes the match list: sort first, then skip, then
//! limit.

mod filter;
mod options;
mod query;

pub use filter::{Filter, FilterOp};
pub use options::{FindOptions, Sort, SortDirection};
pub use query::Query;
