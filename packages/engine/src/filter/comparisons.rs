//! Comparison operations for filter expressions
//!
//! Equality follows numeric promotion and is otherwise strict about types.
//! Ordering is only defined for numbers. A multi-value operand expands the
//! comparison over its items and folds the outcomes by match mode.

use std::cmp::Ordering;

use super::resolution::{RowContext, ValueResolver};
use crate::ast::{ComparisonOp, FilterExpression};
use crate::error::{QueryError, QueryResult};
use crate::value::{MultiValueColumn, NumericPair, Value, promoted_equals, validate_matching};

/// Value comparison utilities
pub struct ValueComparator;

impl ValueComparator {
    /// Resolves both operands against the row and compares them
    pub fn compare_expressions(
        ctx: &RowContext<'_>,
        left: &FilterExpression,
        operator: ComparisonOp,
        right: &FilterExpression,
    ) -> QueryResult<bool> {
        let left = ValueResolver::resolve_value(ctx, left)?;
        let right = ValueResolver::resolve_value(ctx, right)?;

        match (&left, &right) {
            (Value::MultiValue(_), Value::MultiValue(_)) => {
                Err(QueryError::DualMultiValueNotAllowed)
            }
            (Value::MultiValue(multi), other) => {
                Self::compare_multi_value(multi, operator, other, |item, other| {
                    Self::compare_values(item, operator, other)
                })
            }
            (other, Value::MultiValue(multi)) => {
                Self::compare_multi_value(multi, operator, other, |item, other| {
                    Self::compare_values(other, operator, item)
                })
            }
            _ => Self::compare_values(&left, operator, &right),
        }
    }

    /// Compares two single values
    pub fn compare_values(left: &Value, operator: ComparisonOp, right: &Value) -> QueryResult<bool> {
        let result = match operator {
            ComparisonOp::Equal => Self::values_equal(left, right)?,
            ComparisonOp::NotEqual => !Self::values_equal(left, right)?,
            ComparisonOp::Greater => Self::ordering(left, operator, right)?
                .is_some_and(Ordering::is_gt),
            ComparisonOp::GreaterEq => Self::ordering(left, operator, right)?
                .is_some_and(Ordering::is_ge),
            ComparisonOp::Less => Self::ordering(left, operator, right)?
                .is_some_and(Ordering::is_lt),
            ComparisonOp::LessEq => Self::ordering(left, operator, right)?
                .is_some_and(Ordering::is_le),
        };
        tracing::trace!(
            target: "sqljson::filter",
            left = %left,
            operator = operator.symbol(),
            right = %right,
            result = result,
            "Comparison evaluated"
        );
        Ok(result)
    }

    /// Equality with numeric promotion; `Null` equals only `Null`
    fn values_equal(left: &Value, right: &Value) -> QueryResult<bool> {
        if left.is_null() || right.is_null() {
            return Ok(left.is_null() && right.is_null());
        }
        validate_matching(left, right, ComparisonOp::Equal.symbol())?;
        Ok(promoted_equals(left, right))
    }

    /// Numeric ordering, `None` when a NaN is involved
    fn ordering(
        left: &Value,
        operator: ComparisonOp,
        right: &Value,
    ) -> QueryResult<Option<Ordering>> {
        if let Some(pair) = NumericPair::promote(left, right) {
            return Ok(pair.partial_cmp());
        }
        if left.is_null() || left.value_type() == right.value_type() {
            return Err(QueryError::unsupported_type(left, operator.symbol()));
        }
        if right.is_null() {
            return Err(QueryError::unsupported_type(right, operator.symbol()));
        }
        Err(QueryError::type_mismatch(left, operator.symbol(), right))
    }

    /// Validates every item against `other`, then folds `predicate` by mode
    fn compare_multi_value<F>(
        multi: &MultiValueColumn,
        operator: ComparisonOp,
        other: &Value,
        predicate: F,
    ) -> QueryResult<bool>
    where
        F: Fn(&Value, &Value) -> QueryResult<bool>,
    {
        for item in &multi.items {
            validate_matching(item, other, operator.symbol())?;
        }
        let outcomes = multi
            .items
            .iter()
            .map(|item| predicate(item, other))
            .collect::<QueryResult<Vec<bool>>>()?;
        let result = multi.mode.combine(outcomes.into_iter());
        tracing::debug!(
            target: "sqljson::filter",
            mode = %multi.mode,
            items = multi.items.len(),
            result = result,
            "Multi-value comparison evaluated"
        );
        Ok(result)
    }
}
