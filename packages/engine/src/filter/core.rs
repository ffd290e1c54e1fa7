//! Core filter evaluation logic
//!
//! Entry point of the WHERE interpreter. Every expression kind is matched
//! explicitly; kinds that only make sense as operands, and constructs the
//! engine does not implement, fail with `UnsupportedExpression`.

use serde_json::Value as JsonValue;

use super::between::BetweenEvaluator;
use super::comparisons::ValueComparator;
use super::membership::MembershipEvaluator;
use super::resolution::RowContext;
use crate::ast::{FilterExpression, LogicalOp};
use crate::config::QueryConfig;
use crate::error::{QueryError, QueryResult};

/// Filter Expression Evaluator
pub struct FilterEvaluator;

impl FilterEvaluator {
    /// Decides whether `row` is kept by `expr`
    #[inline]
    pub fn evaluate_predicate(
        row: &JsonValue,
        expr: &FilterExpression,
        config: &QueryConfig,
    ) -> QueryResult<bool> {
        Self::evaluate(&RowContext::new(row, config), expr)
    }

    /// Evaluates a predicate within an existing row context
    pub fn evaluate(ctx: &RowContext<'_>, expr: &FilterExpression) -> QueryResult<bool> {
        match expr {
            FilterExpression::Logical {
                left,
                operator,
                right,
            } => {
                // Both sides are evaluated so errors on the right are never masked
                let left_result = Self::evaluate(ctx, left)?;
                let right_result = Self::evaluate(ctx, right)?;
                Ok(match operator {
                    LogicalOp::And => left_result && right_result,
                    LogicalOp::Or => left_result || right_result,
                })
            }
            FilterExpression::Not { expression } => Ok(!Self::evaluate(ctx, expression)?),
            FilterExpression::Parenthesis { expression } => Self::evaluate(ctx, expression),
            FilterExpression::Comparison {
                left,
                operator,
                right,
            } => ValueComparator::compare_expressions(ctx, left, *operator, right),
            FilterExpression::Between {
                field,
                low,
                high,
                negated,
            } => BetweenEvaluator::evaluate(ctx, field, low, high, *negated),
            FilterExpression::In {
                left,
                right,
                negated,
            } => MembershipEvaluator::evaluate(ctx, left, right, *negated),
            FilterExpression::Column { .. }
            | FilterExpression::Literal { .. }
            | FilterExpression::List { .. }
            | FilterExpression::Function { .. }
            | FilterExpression::Arithmetic { .. } => Err(QueryError::unsupported(format!(
                "{} as condition",
                construct_name(expr)
            ))),
            FilterExpression::Like { .. }
            | FilterExpression::IsNull { .. }
            | FilterExpression::Cast { .. }
            | FilterExpression::Case { .. }
            | FilterExpression::Bitwise { .. }
            | FilterExpression::Subquery { .. }
            | FilterExpression::Wildcard
            | FilterExpression::Parameter { .. } => {
                Err(QueryError::unsupported(construct_name(expr)))
            }
        }
    }
}

/// Human readable name of an expression kind, used in error messages
pub(crate) fn construct_name(expr: &FilterExpression) -> String {
    match expr {
        FilterExpression::Column { name } => format!("Column {name}"),
        FilterExpression::Literal { value } => format!("Literal {value}"),
        FilterExpression::List { .. } => "List".to_string(),
        FilterExpression::Comparison { operator, .. } => {
            format!("Comparison {}", operator.symbol())
        }
        FilterExpression::Logical { operator, .. } => format!("Logical {operator:?}"),
        FilterExpression::Not { .. } => "Not".to_string(),
        FilterExpression::Parenthesis { .. } => "Parenthesis".to_string(),
        FilterExpression::Between { .. } => "Between".to_string(),
        FilterExpression::In { .. } => "In".to_string(),
        FilterExpression::Arithmetic { operator, .. } => {
            format!("Arithmetic {}", operator.symbol())
        }
        FilterExpression::Function { name, .. } => format!("Function {name}"),
        FilterExpression::Like { .. } => "Like".to_string(),
        FilterExpression::IsNull { .. } => "IsNull".to_string(),
        FilterExpression::Cast { data_type, .. } => format!("Cast to {data_type}"),
        FilterExpression::Case { .. } => "Case".to_string(),
        FilterExpression::Bitwise { operator, .. } => format!("Bitwise {}", operator.symbol()),
        FilterExpression::Subquery { .. } => "SubSelect".to_string(),
        FilterExpression::Wildcard => "Wildcard".to_string(),
        FilterExpression::Parameter { name: Some(_) } => "JdbcNamedParameter".to_string(),
        FilterExpression::Parameter { name: None } => "JdbcParameter".to_string(),
    }
}
