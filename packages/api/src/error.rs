//! Public error type of the SqlJson API

use sqljson_engine::QueryError;

/// Result alias for façade operations
pub type Result<T> = std::result::Result<T, SqlJsonError>;

/// Failures surfaced by `SqlJson`
#[derive(Debug, thiserror::Error)]
pub enum SqlJsonError {
    /// Document or query clause text is not valid JSON for its target type
    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    /// The document source could not be read
    #[error("Cannot read JSON document: {0}")]
    Io(#[from] std::io::Error),

    /// The query failed during evaluation
    #[error(transparent)]
    Query(#[from] QueryError),
}

impl SqlJsonError {
    /// The evaluation error, when the query itself failed
    #[must_use]
    pub fn as_query_error(&self) -> Option<&QueryError> {
        match self {
            SqlJsonError::Query(error) => Some(error),
            _ => None,
        }
    }
}
