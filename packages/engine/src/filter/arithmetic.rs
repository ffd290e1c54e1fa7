//! Arithmetic sub-expressions
//!
//! Integer operands stay integral and wrap on overflow. Any `Float` operand
//! widens the operation to `f64`.

use super::core::construct_name;
use super::resolution::{RowContext, ValueResolver};
use crate::ast::{ArithmeticOp, FilterExpression};
use crate::error::{QueryError, QueryResult};
use crate::value::{NumericPair, Value};

pub struct ArithmeticEvaluator;

impl ArithmeticEvaluator {
    /// Evaluates a parenthesized or arithmetic operand to a value
    pub fn evaluate(ctx: &RowContext<'_>, expr: &FilterExpression) -> QueryResult<Value> {
        match expr {
            FilterExpression::Parenthesis { expression } => {
                ValueResolver::resolve_value(ctx, expression)
            }
            FilterExpression::Arithmetic {
                left,
                operator,
                right,
            } => {
                let left = ValueResolver::resolve_value(ctx, left)?;
                let right = ValueResolver::resolve_value(ctx, right)?;
                Self::apply(&left, *operator, &right)
            }
            other => Err(QueryError::unsupported(construct_name(other))),
        }
    }

    /// Applies one operator to two resolved operands
    pub fn apply(left: &Value, operator: ArithmeticOp, right: &Value) -> QueryResult<Value> {
        if operator == ArithmeticOp::Modulo {
            return Err(QueryError::unsupported("Modulo"));
        }
        let pair = NumericPair::promote(left, right)
            .ok_or_else(|| QueryError::type_mismatch(left, operator.symbol(), right))?;

        let result = match pair {
            NumericPair::Integers(a, b) => Value::Integer(match operator {
                ArithmeticOp::Add => a.wrapping_add(b),
                ArithmeticOp::Subtract => a.wrapping_sub(b),
                ArithmeticOp::Multiply => a.wrapping_mul(b),
                ArithmeticOp::Divide | ArithmeticOp::Modulo => {
                    if b == 0 {
                        return Err(QueryError::division_by_zero(left, right));
                    }
                    a.wrapping_div(b)
                }
            }),
            NumericPair::Floats(a, b) => Value::Float(match operator {
                ArithmeticOp::Add => a + b,
                ArithmeticOp::Subtract => a - b,
                ArithmeticOp::Multiply => a * b,
                ArithmeticOp::Divide | ArithmeticOp::Modulo => a / b,
            }),
        };

        tracing::trace!(
            target: "sqljson::filter",
            left = %left,
            operator = operator.symbol(),
            right = %right,
            result = %result,
            "Arithmetic evaluated"
        );
        Ok(result)
    }
}
