//! WHERE clause evaluation
//!
//! A tree-walking interpreter deciding, one row at a time, whether the row is
//! kept:
//! - Logical operations (AND, OR, NOT) and parentheses
//! - Comparisons (=, !=, >, >=, <, <=) with numeric promotion
//! - BETWEEN and IN, negated or not
//! - Arithmetic operands (+, -, *, /)
//! - `matchAny(path)` / `matchAll(path)` multi-value columns

mod arithmetic;
mod between;
mod comparisons;
mod core;
mod membership;
mod resolution;

pub use self::core::FilterEvaluator;
pub(crate) use self::core::construct_name;
pub use arithmetic::ArithmeticEvaluator;
pub use comparisons::ValueComparator;
pub use resolution::{RowContext, ValueResolver};
