use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::value::{coerce_number, Value};

/// A comparison operator applied to one field.
///
/// Serializes in the `{"$op": operand}` form. An operator object must
/// carry exactly one recognized operator; anything else is rejected at
/// deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterOp {
    #[serde(rename = "$gt")]
    Gt(Value),
    #[serde(rename = "$gte")]
    Gte(Value),
    #[serde(rename = "$lt")]
    Lt(Value),
    #[serde(rename = "$lte")]
    Lte(Value),
    #[serde(rename = "$ne")]
    Ne(Value),
    #[serde(rename = "$in")]
    In(Vec<Value>),
}

/// A per-field predicate: a bare scalar (strict equality) or a comparison
/// operator.
///
/// Comparison rules, applied to the stored string form of the field:
/// - A missing field satisfies no comparison except `$ne`.
/// - Strict equality (bare scalar, `$ne`, `$in` membership): string
///   operands compare by string equality; numeric operands never equal a
///   stored string — stored values are always strings, so equality with a
///   number is a cross-type comparison that does not coerce. A `$ne` with
///   a numeric operand consequently matches every record.
/// - Ordering (`$gt`/`$gte`/`$lt`/`$lte`): numeric operands coerce the
///   stored string leniently (blank coerces to zero, unparsable never
///   matches); string operands compare lexicographically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Filter {
    Op(FilterOp),
    Value(Value),
}

impl Filter {
    /// Evaluate against the stored form of a field (`None` when the record
    /// has no such field).
    pub fn matches(&self, stored: Option<&str>) -> bool {
        match self {
            Filter::Value(operand) => strict_eq(stored, operand),
            Filter::Op(op) => op.matches(stored),
        }
    }
}

impl FilterOp {
    fn matches(&self, stored: Option<&str>) -> bool {
        match self {
            FilterOp::Gt(operand) => {
                matches!(ordering(stored, operand), Some(Ordering::Greater))
            }
            FilterOp::Gte(operand) => matches!(
                ordering(stored, operand),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            FilterOp::Lt(operand) => matches!(ordering(stored, operand), Some(Ordering::Less)),
            FilterOp::Lte(operand) => matches!(
                ordering(stored, operand),
                Some(Ordering::Less | Ordering::Equal)
            ),
            FilterOp::Ne(operand) => !strict_eq(stored, operand),
            FilterOp::In(operands) => operands.iter().any(|operand| strict_eq(stored, operand)),
        }
    }
}

impl From<Value> for Filter {
    fn from(value: Value) -> Self {
        Filter::Value(value)
    }
}

impl From<FilterOp> for Filter {
    fn from(op: FilterOp) -> Self {
        Filter::Op(op)
    }
}

fn strict_eq(stored: Option<&str>, operand: &Value) -> bool {
    match (stored, operand) {
        (Some(s), Value::Str(v)) => s == v,
        _ => false,
    }
}

fn ordering(stored: Option<&str>, operand: &Value) -> Option<Ordering> {
    let s = stored?;
    match operand {
        Value::Str(v) => Some(s.cmp(v.as_str())),
        Value::Num(n) => coerce_number(s).partial_cmp(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_equality_is_exact() {
        let filter = Filter::Value(Value::from("John"));
        assert!(filter.matches(Some("John")));
        assert!(!filter.matches(Some("Jane")));
        assert!(!filter.matches(None));
    }

    #[test]
    fn numeric_equality_never_matches_stored_strings() {
        let filter = Filter::Value(Value::from(30));
        assert!(!filter.matches(Some("30")));
        assert!(!filter.matches(None));
    }

    #[test]
    fn ne_with_numeric_operand_matches_everything() {
        let filter = Filter::Op(FilterOp::Ne(Value::from(30)));
        assert!(filter.matches(Some("30")));
        assert!(filter.matches(Some("31")));
        assert!(filter.matches(None));
    }

    #[test]
    fn ne_with_string_operand_excludes_equal_values() {
        let filter = Filter::Op(FilterOp::Ne(Value::from("John")));
        assert!(!filter.matches(Some("John")));
        assert!(filter.matches(Some("Jane")));
        assert!(filter.matches(None));
    }

    #[test]
    fn ordering_coerces_stored_strings_numerically() {
        let gte = Filter::Op(FilterOp::Gte(Value::from(25)));
        assert!(gte.matches(Some("30")));
        assert!(gte.matches(Some("25")));
        assert!(!gte.matches(Some("24")));
        assert!(!gte.matches(Some("abc")));
        assert!(!gte.matches(None));

        // Blank coerces to zero.
        let lt = Filter::Op(FilterOp::Lt(Value::from(1)));
        assert!(lt.matches(Some("")));
        assert!(lt.matches(Some("   ")));
    }

    #[test]
    fn ordering_with_string_operand_is_lexicographic() {
        let gt = Filter::Op(FilterOp::Gt(Value::from("b")));
        assert!(gt.matches(Some("c")));
        assert!(!gt.matches(Some("a")));
        // "9" sorts after "30" lexicographically.
        let gt_num_text = Filter::Op(FilterOp::Gt(Value::from("30")));
        assert!(gt_num_text.matches(Some("9")));
    }

    #[test]
    fn in_uses_strict_membership() {
        let filter = Filter::Op(FilterOp::In(vec![Value::from("John"), Value::from(30)]));
        assert!(filter.matches(Some("John")));
        assert!(!filter.matches(Some("30")));
        assert!(!filter.matches(None));
    }

    #[test]
    fn deserializes_operator_objects_and_scalars() {
        let gte: Filter = serde_json::from_str(r#"{"$gte": 25}"#).unwrap();
        assert_eq!(gte, Filter::Op(FilterOp::Gte(Value::Num(25.0))));

        let eq: Filter = serde_json::from_str(r#""John""#).unwrap();
        assert_eq!(eq, Filter::Value(Value::from("John")));

        let within: Filter = serde_json::from_str(r#"{"$in": ["a", "b"]}"#).unwrap();
        assert_eq!(
            within,
            Filter::Op(FilterOp::In(vec![Value::from("a"), Value::from("b")]))
        );
    }

    #[test]
    fn rejects_operator_objects_with_more_than_one_key() {
        assert!(serde_json::from_str::<Filter>(r#"{"$gt": 1, "$lt": 5}"#).is_err());
        assert!(serde_json::from_str::<Filter>(r#"{"$unknown": 1}"#).is_err());
    }

    #[test]
    fn serializes_back_to_operator_form() {
        let json = serde_json::to_value(Filter::Op(FilterOp::Lte(Value::Num(40.0)))).unwrap();
        assert_eq!(json, serde_json::json!({"$lte": 40.0}));
    }
}
