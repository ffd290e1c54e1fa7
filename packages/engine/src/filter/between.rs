//! BETWEEN evaluation
//!
//! Inclusive on both bounds. The field must be numeric; a `Float` anywhere
//! among field and bounds widens all three before the bounds are checked.

use std::cmp::Ordering;

use super::resolution::{RowContext, ValueResolver};
use crate::ast::FilterExpression;
use crate::error::{QueryError, QueryResult};
use crate::value::promotion::promote_among;
use crate::value::{NumericPair, Value, validate_matching};

pub struct BetweenEvaluator;

impl BetweenEvaluator {
    pub fn evaluate(
        ctx: &RowContext<'_>,
        field: &FilterExpression,
        low: &FilterExpression,
        high: &FilterExpression,
        negated: bool,
    ) -> QueryResult<bool> {
        let field = ValueResolver::resolve_value(ctx, field)?;
        let low = ValueResolver::resolve_value(ctx, low)?;
        let high = ValueResolver::resolve_value(ctx, high)?;

        let within = match &field {
            Value::MultiValue(multi) => {
                for item in &multi.items {
                    Self::validate(item, &low, &high)?;
                }
                multi
                    .mode
                    .combine(multi.items.iter().map(|item| Self::within(item, &low, &high)))
            }
            single => {
                Self::validate(single, &low, &high)?;
                Self::within(single, &low, &high)
            }
        };

        tracing::trace!(
            target: "sqljson::filter",
            field = %field,
            low = %low,
            high = %high,
            negated = negated,
            within = within,
            "Between evaluated"
        );
        Ok(within != negated)
    }

    fn validate(item: &Value, low: &Value, high: &Value) -> QueryResult<()> {
        if !item.is_numeric() {
            return Err(QueryError::non_numeric_between(item));
        }
        let promoted_item = promote_among(item, &[low, high]);
        let promoted_low = promote_among(low, &[item, high]);
        let promoted_high = promote_among(high, &[item, low]);
        validate_matching(&promoted_item, &promoted_low, "Between(start range)")?;
        validate_matching(&promoted_item, &promoted_high, "Between(end range)")
    }

    fn within(item: &Value, low: &Value, high: &Value) -> bool {
        let above_low = NumericPair::promote(item, low)
            .and_then(NumericPair::partial_cmp)
            .is_some_and(Ordering::is_ge);
        let below_high = NumericPair::promote(item, high)
            .and_then(NumericPair::partial_cmp)
            .is_some_and(Ordering::is_le);
        above_low && below_high
    }
}
