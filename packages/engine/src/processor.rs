//! Query processor
//!
//! Runs one query against one document: locate the table element, derive and
//! filter its rows, project the survivors, assemble the result set and drop
//! duplicates when DISTINCT was asked for.

use serde_json::Value as JsonValue;

use crate::ast::QueryClause;
use crate::config::QueryConfig;
use crate::error::QueryResult;
use crate::filter::{FilterEvaluator, RowContext};
use crate::path::PathResolver;
use crate::result::{ResultSet, ResultSetBuilder};
use crate::select::SelectProjector;

/// Evaluates a `QueryClause` against a read-only document
#[derive(Debug, Clone, Copy)]
pub struct JsonProcessor<'a> {
    document: &'a JsonValue,
    query: &'a QueryClause,
    config: QueryConfig,
}

impl<'a> JsonProcessor<'a> {
    #[must_use]
    pub fn new(document: &'a JsonValue, query: &'a QueryClause, config: QueryConfig) -> Self {
        Self {
            document,
            query,
            config,
        }
    }

    /// Evaluates the query
    ///
    /// # Errors
    ///
    /// Any evaluation failure aborts the whole query; no partial result is
    /// returned.
    pub fn process(&self) -> QueryResult<ResultSet> {
        tracing::debug!(
            target: "sqljson::processor",
            table = %self.query.root_path(),
            distinct = self.query.is_distinct(),
            "Processing query"
        );
        let projector = SelectProjector::new(self.query.projections(), self.config)?;

        let table = PathResolver::resolve(self.document, self.query.root_path(), false)?;
        let rows = self.filter(&table)?;
        tracing::debug!(
            target: "sqljson::processor",
            rows = rows.len(),
            "Rows kept by filter"
        );

        let projected = rows
            .into_iter()
            .map(|row| projector.project(row))
            .collect::<QueryResult<Vec<_>>>()?;

        let mut builder = ResultSetBuilder::from_projected(projected);
        if self.query.is_distinct() {
            builder.apply_distinct();
        }
        Ok(builder.build())
    }

    /// Rows of `table` kept by the filter, in document order
    ///
    /// Arrays contribute their elements, nested arrays flattened in order;
    /// any other node is a single candidate row.
    pub fn filter<'t>(&self, table: &'t JsonValue) -> QueryResult<Vec<&'t JsonValue>> {
        let mut kept = Vec::new();
        self.collect_rows(table, &mut kept)?;
        Ok(kept)
    }

    fn collect_rows<'t>(&self, node: &'t JsonValue, kept: &mut Vec<&'t JsonValue>) -> QueryResult<()> {
        if let JsonValue::Array(items) = node {
            for item in items {
                self.collect_rows(item, kept)?;
            }
            return Ok(());
        }

        let keep = match self.query.filter() {
            None => true,
            Some(predicate) => {
                FilterEvaluator::evaluate(&RowContext::new(node, &self.config), predicate)?
            }
        };
        tracing::trace!(target: "sqljson::processor", keep = keep, "Row evaluated");
        if keep {
            kept.push(node);
        }
        Ok(())
    }
}
