//! Runtime classification of JSON values.
//!
//! The diff engine never inspects `serde_json::Value` variants directly to
//! decide comparability; it goes through [`ValueKind`] so the dispatch is a
//! closed, exhaustively-matched enum.

use serde_json::Value;

/// The runtime kind of a JSON value.
///
/// `Null` is its own kind rather than a degenerate mapping. This mirrors the
/// usual JSON confusion between absence-of-object and object, and it is what
/// makes a `null`-vs-`{}` comparison classify as a type change instead of a
/// container comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// The JSON `null` literal.
    Null,
    /// An ordered sequence (JSON array).
    Sequence,
    /// A keyed mapping (JSON object).
    Mapping,
    /// A scalar leaf value.
    Scalar(ScalarKind),
}

/// The type tag of a scalar value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    String,
    Number,
    Boolean,
}

impl ValueKind {
    /// Classify a JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Scalar(ScalarKind::Boolean),
            Value::Number(_) => ValueKind::Scalar(ScalarKind::Number),
            Value::String(_) => ValueKind::Scalar(ScalarKind::String),
            Value::Array(_) => ValueKind::Sequence,
            Value::Object(_) => ValueKind::Mapping,
        }
    }

    /// Returns `true` for sequences and mappings.
    pub fn is_container(&self) -> bool {
        matches!(self, ValueKind::Sequence | ValueKind::Mapping)
    }
}

/// Two values are shape-compatible iff their kinds are equal.
///
/// A sequence and a mapping are never shape-compatible even though both are
/// containers, and `null` is compatible only with `null`.
pub fn is_shape_compatible(left: &Value, right: &Value) -> bool {
    ValueKind::of(left) == ValueKind::of(right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_is_its_own_kind() {
        assert_eq!(ValueKind::of(&json!(null)), ValueKind::Null);
        assert_ne!(ValueKind::of(&json!(null)), ValueKind::Mapping);
        assert!(!ValueKind::Null.is_container());
    }

    #[test]
    fn scalar_kinds_carry_type_tags() {
        assert_eq!(
            ValueKind::of(&json!("hi")),
            ValueKind::Scalar(ScalarKind::String)
        );
        assert_eq!(
            ValueKind::of(&json!(3.5)),
            ValueKind::Scalar(ScalarKind::Number)
        );
        assert_eq!(
            ValueKind::of(&json!(true)),
            ValueKind::Scalar(ScalarKind::Boolean)
        );
    }

    #[test]
    fn containers_classify_by_flavor() {
        assert_eq!(ValueKind::of(&json!([])), ValueKind::Sequence);
        assert_eq!(ValueKind::of(&json!({})), ValueKind::Mapping);
        assert!(ValueKind::Sequence.is_container());
        assert!(ValueKind::Mapping.is_container());
    }

    #[test]
    fn sequence_and_mapping_are_not_shape_compatible() {
        assert!(!is_shape_compatible(&json!([]), &json!({})));
        assert!(!is_shape_compatible(&json!(null), &json!({})));
        assert!(!is_shape_compatible(&json!("1"), &json!(1)));
        assert!(is_shape_compatible(&json!([1]), &json!(["a"])));
        assert!(is_shape_compatible(&json!(1), &json!(2)));
    }
}
