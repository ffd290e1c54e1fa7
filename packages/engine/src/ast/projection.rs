//! SELECT list items

use serde::{Deserialize, Serialize};

use super::expression::FilterExpression;

/// Column name used for the whole-row selector
pub const WHOLE_ROW: &str = ".";

/// One item of the SELECT list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProjectionItem {
    /// `*`, every top-level field of the row
    AllColumns,
    /// `"."`, the entire row as one column; cannot be combined with other items
    WholeRow,
    /// A single expression with optional alias
    Expression {
        expression: FilterExpression,
        #[serde(default)]
        alias: Option<String>,
    },
    /// `table.*`
    TableWildcard { table: String },
}

impl ProjectionItem {
    /// Selects one dotted path, named by the path itself
    pub fn column(path: impl Into<String>) -> Self {
        ProjectionItem::Expression {
            expression: FilterExpression::column(path),
            alias: None,
        }
    }

    /// Selects one dotted path under an alias
    pub fn aliased(path: impl Into<String>, alias: impl Into<String>) -> Self {
        ProjectionItem::Expression {
            expression: FilterExpression::column(path),
            alias: Some(alias.into()),
        }
    }
}
