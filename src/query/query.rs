use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::filter::{Filter, FilterOp};
use crate::model::Record;
use crate::value::Value;

/// A query: field names mapped to filters, matched as a conjunction.
///
/// The empty query matches every record. Deserializes from the
/// `{"name": "John", "age": {"$gte": 25}}` form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query {
    filters: BTreeMap<String, Filter>,
}

impl Query {
    /// Create an empty (match-all) query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a filter to a field, replacing any existing one.
    pub fn filter(mut self, field: impl Into<String>, filter: impl Into<Filter>) -> Self {
        self.filters.insert(field.into(), filter.into());
        self
    }

    /// Require strict equality on `field`.
    pub fn eq(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(field, Filter::Value(value.into()))
    }

    /// Require inequality on `field`.
    pub fn ne(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(field, FilterOp::Ne(value.into()))
    }

    /// Require `field` to order strictly above `value`.
    pub fn gt(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(field, FilterOp::Gt(value.into()))
    }

    /// Require `field` to order at or above `value`.
    pub fn gte(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(field, FilterOp::Gte(value.into()))
    }

    /// Require `field` to order strictly below `value`.
    pub fn lt(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(field, FilterOp::Lt(value.into()))
    }

    /// Require `field` to order at or below `value`.
    pub fn lte(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(field, FilterOp::Lte(value.into()))
    }

    /// Require `field` to equal one of `values`.
    pub fn one_of<I, V>(self, field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.filter(
            field,
            FilterOp::In(values.into_iter().map(Into::into).collect()),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// A record matches when every field filter is satisfied against the
    /// record's stored value for that field.
    pub fn matches(&self, record: &Record) -> bool {
        self.filters
            .iter()
            .all(|(field, filter)| filter.matches(record.get(field).map(String::as_str)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(Query::new().matches(&record(&[("id", "1")])));
        assert!(Query::new().matches(&Record::new()));
    }

    #[test]
    fn fields_are_anded() {
        let query = Query::new().eq("name", "John").gte("age", 25);
        assert!(query.matches(&record(&[("name", "John"), ("age", "30")])));
        assert!(!query.matches(&record(&[("name", "John"), ("age", "20")])));
        assert!(!query.matches(&record(&[("name", "Jane"), ("age", "30")])));
    }

    #[test]
    fn missing_fields_fail_positive_filters() {
        let query = Query::new().gte("age", 25);
        assert!(!query.matches(&record(&[("name", "John")])));
    }

    #[test]
    fn deserializes_from_the_json_surface() {
        let query: Query =
            serde_json::from_value(serde_json::json!({"name": "John", "age": {"$gte": 25}}))
                .unwrap();
        assert_eq!(query, Query::new().eq("name", "John").gte("age", 25));
    }
}
