//! Scalar / complex classification
//!
//! Decides whether a value renders as text in a grid cell or needs a
//! drill-down affordance.

use crate::value::Value;

/// Classification of a single value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Absent value
    Null,
    /// Primitive on the scalar allow-list, rendered as text
    Scalar,
    /// Record, mapping or sequence, rendered as a drill-down affordance
    Complex,
}

/// Classify a value by its top-level variant.
///
/// Only the outer variant matters: a list of integers is complex even though
/// every element is scalar.
pub fn classify(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Text(_)
        | Value::Int32(_)
        | Value::Int64(_)
        | Value::Double(_)
        | Value::Single(_)
        | Value::Bool(_)
        | Value::DateTime(_)
        | Value::Decimal(_)
        | Value::Byte(_) => ValueKind::Scalar,
        Value::List(_) | Value::Map(_) | Value::Record(_) => ValueKind::Complex,
    }
}

impl Value {
    /// Classify this value
    #[inline]
    pub fn kind(&self) -> ValueKind {
        classify(self)
    }

    /// Check if this value is on the scalar allow-list
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.kind() == ValueKind::Scalar
    }

    /// Check if this value needs drill-down
    #[inline]
    pub fn is_complex(&self) -> bool {
        self.kind() == ValueKind::Complex
    }
}
