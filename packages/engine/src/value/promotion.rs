//! Numeric promotion and type matching
//!
//! If either operand of a numeric operator is a `Float`, both are widened to
//! `Float`. Two `Integer`s stay integral. Any other mix of concrete types is a
//! type error for the operator asking.

use std::cmp::Ordering;

use super::core::Value;
use crate::error::{QueryError, QueryResult};

/// Two numeric operands after promotion
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericPair {
    Integers(i64, i64),
    Floats(f64, f64),
}

impl NumericPair {
    /// Promotes two values, `None` unless both are numeric
    #[must_use]
    pub fn promote(left: &Value, right: &Value) -> Option<Self> {
        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Some(NumericPair::Integers(*a, *b)),
            (Value::Float(a), Value::Float(b)) => Some(NumericPair::Floats(*a, *b)),
            (Value::Integer(a), Value::Float(b)) => Some(NumericPair::Floats(*a as f64, *b)),
            (Value::Float(a), Value::Integer(b)) => Some(NumericPair::Floats(*a, *b as f64)),
            _ => None,
        }
    }

    /// Ordering of the promoted operands; `None` when a float is NaN
    #[must_use]
    pub fn partial_cmp(self) -> Option<Ordering> {
        match self {
            NumericPair::Integers(a, b) => Some(a.cmp(&b)),
            NumericPair::Floats(a, b) => a.partial_cmp(&b),
        }
    }
}

/// Applies numeric promotion to a single value given its peers
///
/// Returns the value widened to `Float` when any peer is a `Float`,
/// otherwise a clone of the value.
#[must_use]
pub fn promote_among(value: &Value, peers: &[&Value]) -> Value {
    let widen = value.is_numeric() && peers.iter().any(|p| matches!(p, Value::Float(_)));
    match (value, widen) {
        (Value::Integer(i), true) => Value::Float(*i as f64),
        _ => value.clone(),
    }
}

/// Strict type matching used by comparisons and arithmetic
///
/// Operands must share one concrete type after promotion. `Null` never matches.
pub fn validate_matching(left: &Value, right: &Value, operator: &str) -> QueryResult<()> {
    if left.is_null() || right.is_null() {
        return Err(QueryError::type_mismatch(left, operator, right));
    }
    if NumericPair::promote(left, right).is_some() || left.value_type() == right.value_type() {
        Ok(())
    } else {
        Err(QueryError::type_mismatch(left, operator, right))
    }
}

/// Value equality after numeric promotion
#[must_use]
pub fn promoted_equals(left: &Value, right: &Value) -> bool {
    match NumericPair::promote(left, right) {
        Some(NumericPair::Integers(a, b)) => a == b,
        Some(NumericPair::Floats(a, b)) => a == b,
        None => left == right,
    }
}
