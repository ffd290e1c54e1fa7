//! SqlJson Public API
//!
//! Query JSON documents with SQL-style clauses and read the answer through a
//! JDBC-like cursor. Parsing of SQL text is left to the caller; queries arrive
//! as a `QueryClause`, built in code or deserialized from JSON.
//!
//! ```
//! use sqljson::{FilterExpression, QueryClause, SqlJson};
//!
//! let sql_json = SqlJson::from_str(r#"[{"name": "Daniel", "age": 38}, {"name": "John", "age": 41}]"#)
//!     .expect("valid document");
//! let query = QueryClause::builder(".")
//!     .filter(FilterExpression::compare(
//!         FilterExpression::column("age"),
//!         sqljson::ComparisonOp::GreaterEq,
//!         FilterExpression::literal(40),
//!     ))
//!     .select_column("name")
//!     .build();
//!
//! let mut result = sql_json.query(&query).expect("query evaluates");
//! assert!(result.advance());
//! assert_eq!(result.get_string(0).expect("readable").as_deref(), Some("John"));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

use std::io::Read;
use std::path::Path;

use serde_json::Value as JsonValue;

pub mod builder;
pub mod error;

pub use builder::SqlJsonBuilder;
pub use error::{Result, SqlJsonError};
pub use sqljson_engine::ast::{
    ArithmeticOp, BitwiseOp, ComparisonOp, FilterExpression, Literal, LogicalOp, ProjectionItem,
    QueryClause, QueryClauseBuilder,
};
pub use sqljson_engine::{
    AccessError, JsonProcessor, MatchMode, QueryConfig, QueryError, ResultRow, ResultSet, Value,
    ValueType,
};

/// A JSON document ready to be queried
///
/// The document is never modified, so one `SqlJson` can serve any number of
/// queries, including from several threads at once.
#[derive(Debug, Clone)]
pub struct SqlJson {
    document: JsonValue,
    config: QueryConfig,
}

impl SqlJson {
    /// Start configuring a `SqlJson`
    #[must_use]
    pub fn builder() -> SqlJsonBuilder {
        SqlJsonBuilder::new()
    }

    #[must_use]
    pub fn with_config(document: JsonValue, config: QueryConfig) -> Self {
        Self { document, config }
    }

    /// Wraps an already parsed document with the default configuration
    #[must_use]
    pub fn from_value(document: JsonValue) -> Self {
        Self::with_config(document, QueryConfig::default())
    }

    /// Parses JSON text
    ///
    /// # Errors
    ///
    /// Returns `SqlJsonError::Json` when the text is not valid JSON.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(json: &str) -> Result<Self> {
        SqlJsonBuilder::new().parse(json)
    }

    /// Reads a JSON document from `reader`
    ///
    /// # Errors
    ///
    /// Returns `SqlJsonError::Json` when the input is not valid JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        SqlJsonBuilder::new().read(reader)
    }

    /// Reads the JSON file at `path`
    ///
    /// # Errors
    ///
    /// Returns `SqlJsonError::Io` when the file cannot be opened and
    /// `SqlJsonError::Json` when its content is not valid JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        SqlJsonBuilder::new().open(path)
    }

    #[must_use]
    pub fn document(&self) -> &JsonValue {
        &self.document
    }

    #[must_use]
    pub fn config(&self) -> QueryConfig {
        self.config
    }

    /// Evaluates a query against the document
    ///
    /// # Errors
    ///
    /// Returns `SqlJsonError::Query` carrying the evaluation failure.
    pub fn query(&self, query: &QueryClause) -> Result<ResultSet> {
        log::debug!("SqlJson: executing {query}");
        let result = JsonProcessor::new(&self.document, query, self.config)
            .process()
            .map_err(|error| {
                log::debug!("SqlJson: query failed: {error}");
                error
            })?;
        log::debug!("SqlJson: query returned {} rows", result.len());
        Ok(result)
    }

    /// Evaluates a query clause given in its JSON form
    ///
    /// # Errors
    ///
    /// Returns `SqlJsonError::Json` when the clause does not deserialize and
    /// `SqlJsonError::Query` when evaluation fails.
    pub fn query_json(&self, clause: &str) -> Result<ResultSet> {
        let query: QueryClause = serde_json::from_str(clause)?;
        self.query(&query)
    }
}

impl std::str::FromStr for SqlJson {
    type Err = SqlJsonError;

    fn from_str(json: &str) -> Result<Self> {
        SqlJsonBuilder::new().parse(json)
    }
}

impl From<JsonValue> for SqlJson {
    fn from(document: JsonValue) -> Self {
        Self::from_value(document)
    }
}
