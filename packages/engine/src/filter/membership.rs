//! IN / NOT IN evaluation

use super::resolution::{RowContext, ValueResolver};
use crate::ast::FilterExpression;
use crate::error::{QueryError, QueryResult};
use crate::value::Value;

const LIST_MISMATCH: &str = "Different types in list";

pub struct MembershipEvaluator;

impl MembershipEvaluator {
    /// Evaluates `left [NOT] IN right`
    ///
    /// An empty side discards the row whether or not the test is negated.
    pub fn evaluate(
        ctx: &RowContext<'_>,
        left: &FilterExpression,
        right: &FilterExpression,
        negated: bool,
    ) -> QueryResult<bool> {
        let left_values = match left {
            FilterExpression::List { items } => Self::resolve_list(ctx, items)?,
            expr => vec![ValueResolver::resolve_value(ctx, expr)?],
        };
        let right_values = Self::resolve_candidates(ctx, right)?;

        if left_values.is_empty() || right_values.is_empty() {
            tracing::debug!(
                target: "sqljson::filter",
                left = %left,
                right = %right,
                "Empty side in IN expression, discarding row"
            );
            return Ok(false);
        }

        let contained = match left_values.as_slice() {
            [Value::MultiValue(multi)] => multi
                .mode
                .combine(multi.items.iter().map(|item| right_values.contains(item))),
            _ => {
                let expected = &left_values[0];
                for value in left_values.iter().chain(&right_values) {
                    if value.value_type() != expected.value_type() {
                        return Err(QueryError::type_mismatch(expected, "IN", value));
                    }
                }
                left_values.iter().all(|value| right_values.contains(value))
            }
        };

        tracing::trace!(
            target: "sqljson::filter",
            left = left_values.len(),
            right = right_values.len(),
            contained = contained,
            negated = negated,
            "In evaluated"
        );
        Ok(contained != negated)
    }

    /// Right-hand candidates: list items, a resolved array, or multi-value items
    fn resolve_candidates(
        ctx: &RowContext<'_>,
        right: &FilterExpression,
    ) -> QueryResult<Vec<Value>> {
        if let FilterExpression::List { items } = right {
            return Self::resolve_list(ctx, items);
        }
        Ok(match ValueResolver::resolve_value(ctx, right)? {
            Value::List(items) => items,
            Value::MultiValue(multi) => multi.items,
            single => vec![single],
        })
    }

    /// Resolves a literal list, which must be homogeneous
    fn resolve_list(ctx: &RowContext<'_>, items: &[FilterExpression]) -> QueryResult<Vec<Value>> {
        let mut resolved: Vec<Value> = Vec::with_capacity(items.len());
        for item in items {
            let value = ValueResolver::resolve_value(ctx, item)?;
            if let Some(first) = resolved.first() {
                if first.value_type() != value.value_type() {
                    return Err(QueryError::type_mismatch(first, LIST_MISMATCH, &value));
                }
            }
            resolved.push(value);
        }
        Ok(resolved)
    }
}
