//! Query Error Types
//!
//! Core error types for query evaluation and result-set access.

use crate::value::ValueType;

/// Result type for query evaluation
pub type QueryResult<T> = Result<T, QueryError>;

/// Evaluation failures. Every one aborts the whole query.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    /// A required path segment is absent from the document
    #[error("Cannot find element '{element}'{}", from_clause(.expression))]
    ElementNotFound {
        element: String,
        expression: Option<String>,
    },

    /// A column referenced by the query does not exist in the row
    #[error("Column not found {column}")]
    ColumnNotFound { column: String },

    /// Operands have incompatible concrete types
    #[error("Invalid types in expression {left}({left_type}) {operator} {right}({right_type})")]
    TypeMismatch {
        left: String,
        left_type: ValueType,
        operator: String,
        right: String,
        right_type: ValueType,
    },

    /// Ordering comparison applied to non-numeric operands
    #[error("{value_type} not supported for {operator}")]
    UnsupportedType {
        value_type: ValueType,
        operator: String,
    },

    #[error("cannot perform between for {value_type}")]
    NonNumericBetween { value_type: ValueType },

    #[error("MultiColumn on both sides of expression not allowed.")]
    DualMultiValueNotAllowed,

    /// Valid syntax the engine does not implement
    #[error("Expression {construct} not yet supported")]
    UnsupportedExpression { construct: String },

    #[error("{0}")]
    InvalidProjection(String),

    #[error("{0}")]
    InvalidFunctionArgument(String),

    #[error("Division by zero in expression {left} / {right}")]
    DivisionByZero { left: String, right: String },
}

fn from_clause(expression: &Option<String>) -> String {
    expression
        .as_ref()
        .map(|e| format!(" from '{e}'"))
        .unwrap_or_default()
}

/// Cursor and accessor failures on a materialized result set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("Cursor is not positioned on a row")]
    NoCurrentRow,

    #[error("Column index {index} out of range, result has {width} columns")]
    ColumnIndexOutOfRange { index: usize, width: usize },

    #[error("Column {0} not found")]
    UnknownColumn(String),

    #[error("Column {column} holds {actual}, cannot be read as {requested}")]
    InvalidColumnType {
        column: String,
        actual: ValueType,
        requested: &'static str,
    },
}
