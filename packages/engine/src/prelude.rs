//! SqlJson Engine Prelude
//!
//! The types needed to build a query, run it and read its results.

pub use crate::ast::{
    ArithmeticOp, ComparisonOp, FilterExpression, Literal, LogicalOp, ProjectionItem, QueryClause,
};
pub use crate::config::QueryConfig;
pub use crate::error::{AccessError, QueryError, QueryResult};
pub use crate::processor::JsonProcessor;
pub use crate::result::{ResultRow, ResultSet};
pub use crate::value::{MatchMode, Value, ValueType};
