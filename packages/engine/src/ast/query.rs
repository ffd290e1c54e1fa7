//! Parsed query clause
//!
//! The immutable description of one query, as handed over by a SQL parser:
//! which element of the document is the table, how rows are filtered, which
//! columns come back and whether duplicates are dropped.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::expression::FilterExpression;
use super::projection::ProjectionItem;

/// Root path addressing the whole document
pub const DOCUMENT_ROOT: &str = ".";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryClause {
    root_path: String,
    #[serde(default)]
    filter: Option<FilterExpression>,
    projections: Vec<ProjectionItem>,
    #[serde(default)]
    distinct: bool,
}

impl QueryClause {
    #[must_use]
    pub fn builder(root_path: impl Into<String>) -> QueryClauseBuilder {
        QueryClauseBuilder::new(root_path)
    }

    /// Dotted path of the table element, `"."` for the document root
    #[must_use]
    pub fn root_path(&self) -> &str {
        &self.root_path
    }

    #[must_use]
    pub fn filter(&self) -> Option<&FilterExpression> {
        self.filter.as_ref()
    }

    #[must_use]
    pub fn projections(&self) -> &[ProjectionItem] {
        &self.projections
    }

    #[must_use]
    pub fn is_distinct(&self) -> bool {
        self.distinct
    }
}

impl fmt::Display for QueryClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "QueryClause{{root_path='{}', filter={}, projections={}, distinct={}}}",
            self.root_path,
            self.filter
                .as_ref()
                .map_or_else(|| "none".to_string(), ToString::to_string),
            self.projections.len(),
            self.distinct
        )
    }
}

/// Builder for `QueryClause`
#[derive(Debug, Clone)]
pub struct QueryClauseBuilder {
    root_path: String,
    filter: Option<FilterExpression>,
    projections: Vec<ProjectionItem>,
    distinct: bool,
}

impl QueryClauseBuilder {
    pub fn new(root_path: impl Into<String>) -> Self {
        Self {
            root_path: root_path.into(),
            filter: None,
            projections: Vec::new(),
            distinct: false,
        }
    }

    #[must_use]
    pub fn filter(mut self, filter: FilterExpression) -> Self {
        self.filter = Some(filter);
        self
    }

    #[must_use]
    pub fn select(mut self, item: ProjectionItem) -> Self {
        self.projections.push(item);
        self
    }

    #[must_use]
    pub fn select_all(self) -> Self {
        self.select(ProjectionItem::AllColumns)
    }

    #[must_use]
    pub fn select_row(self) -> Self {
        self.select(ProjectionItem::WholeRow)
    }

    #[must_use]
    pub fn select_column(self, path: &str) -> Self {
        self.select(ProjectionItem::column(path))
    }

    #[must_use]
    pub fn distinct(mut self, distinct: bool) -> Self {
        self.distinct = distinct;
        self
    }

    #[must_use]
    pub fn build(self) -> QueryClause {
        QueryClause {
            root_path: self.root_path,
            filter: self.filter,
            projections: self.projections,
            distinct: self.distinct,
        }
    }
}
