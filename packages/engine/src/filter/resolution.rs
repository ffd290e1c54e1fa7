//! Value resolution for filter operands
//!
//! Turns an operand expression into a runtime `Value` against the row being
//! filtered: literals directly, columns through the path resolver, the
//! `matchAny`/`matchAll` markers through multi-value collection, and
//! everything composite through the arithmetic evaluator.

use serde_json::Value as JsonValue;

use super::arithmetic::ArithmeticEvaluator;
use super::core::construct_name;
use crate::ast::FilterExpression;
use crate::config::QueryConfig;
use crate::error::{QueryError, QueryResult};
use crate::path::{MultiColumnCollector, PathResolver};
use crate::value::{MatchMode, MultiValueColumn, Value};

/// The row a predicate is evaluated against, plus conversion settings
#[derive(Debug, Clone, Copy)]
pub struct RowContext<'a> {
    row: &'a JsonValue,
    infer_temporal: bool,
}

impl<'a> RowContext<'a> {
    #[must_use]
    pub fn new(row: &'a JsonValue, config: &QueryConfig) -> Self {
        Self {
            row,
            infer_temporal: config.infer_temporal_text,
        }
    }

    #[inline]
    #[must_use]
    pub fn row(&self) -> &'a JsonValue {
        self.row
    }

    /// Converts a document node with this context's inference settings
    #[inline]
    #[must_use]
    pub fn convert(&self, node: &JsonValue) -> Value {
        Value::from_json_with(node, self.infer_temporal)
    }
}

/// Operand resolution utilities
pub struct ValueResolver;

impl ValueResolver {
    /// Resolves an operand expression to its runtime value
    pub fn resolve_value(ctx: &RowContext<'_>, expr: &FilterExpression) -> QueryResult<Value> {
        match expr {
            FilterExpression::Literal { value } => Ok(value.to_value()),
            FilterExpression::Column { name } => Self::resolve_column(ctx, name),
            FilterExpression::Function { name, args } => Self::resolve_multi_column(ctx, name, args),
            FilterExpression::Parenthesis { .. } | FilterExpression::Arithmetic { .. } => {
                ArithmeticEvaluator::evaluate(ctx, expr)
            }
            other => Err(QueryError::unsupported(construct_name(other))),
        }
    }

    fn resolve_column(ctx: &RowContext<'_>, name: &str) -> QueryResult<Value> {
        match PathResolver::resolve(ctx.row(), name, false) {
            Ok(node) => Ok(ctx.convert(&node)),
            Err(error) if error.is_missing_path() => {
                tracing::debug!(
                    target: "sqljson::filter",
                    column = %name,
                    cause = %error,
                    "Column missing from row"
                );
                Err(QueryError::column_not_found(name))
            }
            Err(error) => Err(error),
        }
    }

    fn resolve_multi_column(
        ctx: &RowContext<'_>,
        name: &str,
        args: &[FilterExpression],
    ) -> QueryResult<Value> {
        let mode = MatchMode::from_function_name(name).ok_or_else(|| {
            QueryError::unsupported(format!(
                "Function {name} (supported: {})",
                MatchMode::all_options_as_string()
            ))
        })?;

        let [argument] = args else {
            return Err(QueryError::invalid_function_argument(format!(
                "Invalid number of parameters. {name} expects 1 parameter, but got {}",
                args.len()
            )));
        };
        let FilterExpression::Column { name: path } = argument else {
            return Err(QueryError::invalid_function_argument(format!(
                "Parameters for function {name} should be column"
            )));
        };

        let items = MultiColumnCollector::collect(ctx.row(), path)?
            .into_iter()
            .map(|node| ctx.convert(node))
            .collect();
        Ok(Value::MultiValue(MultiValueColumn::new(mode, items)))
    }
}
