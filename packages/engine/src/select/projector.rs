//! SELECT list projection
//!
//! Produces, for each surviving row, the ordered mapping from output column
//! name to value. Items are applied in declaration order; `*` expands to the
//! row's top-level fields in document order.

use serde_json::Value as JsonValue;

use super::row::ProjectedRow;
use crate::ast::{FilterExpression, ProjectionItem, WHOLE_ROW};
use crate::config::QueryConfig;
use crate::error::{QueryError, QueryResult};
use crate::filter::construct_name;
use crate::path::PathResolver;
use crate::value::Value;

/// Projects rows according to a validated SELECT list
#[derive(Debug, Clone, Copy)]
pub struct SelectProjector<'q> {
    projections: &'q [ProjectionItem],
    config: QueryConfig,
}

impl<'q> SelectProjector<'q> {
    /// Validates the SELECT list once for the whole query
    pub fn new(projections: &'q [ProjectionItem], config: QueryConfig) -> QueryResult<Self> {
        if projections.is_empty() {
            return Err(QueryError::invalid_projection("No columns selected"));
        }
        let whole_row = projections
            .iter()
            .any(|item| matches!(item, ProjectionItem::WholeRow));
        if whole_row && projections.len() > 1 {
            return Err(QueryError::invalid_projection(
                "Selectors '.' cannot be combined with anything else",
            ));
        }
        Ok(Self {
            projections,
            config,
        })
    }

    /// Projects one row
    pub fn project(&self, row: &JsonValue) -> QueryResult<ProjectedRow> {
        let mut projected = ProjectedRow::new();
        for item in self.projections {
            match item {
                ProjectionItem::WholeRow => projected.insert(WHOLE_ROW, self.convert(row)),
                ProjectionItem::AllColumns => {
                    if let Some(fields) = row.as_object() {
                        for (name, value) in fields {
                            projected.insert(name.as_str(), self.convert(value));
                        }
                    }
                }
                ProjectionItem::Expression { expression, alias } => {
                    let (name, value) = self.project_expression(row, expression)?;
                    projected.insert(alias.clone().unwrap_or(name), value);
                }
                ProjectionItem::TableWildcard { table } => {
                    return Err(QueryError::unsupported(format!("Wildcard select ({table}.*)")));
                }
            }
        }
        tracing::trace!(
            target: "sqljson::select",
            columns = projected.len(),
            "Row projected"
        );
        Ok(projected)
    }

    fn project_expression(
        &self,
        row: &JsonValue,
        expression: &FilterExpression,
    ) -> QueryResult<(String, Value)> {
        match expression {
            FilterExpression::Column { name } => {
                let strict = self.config.strict_result_row_existence;
                let node = PathResolver::resolve(row, name, !strict).map_err(|error| {
                    tracing::debug!(
                        target: "sqljson::select",
                        column = %name,
                        cause = %error,
                        "Selected column missing from row"
                    );
                    QueryError::column_not_found(name)
                })?;
                Ok((name.clone(), self.convert(&node)))
            }
            FilterExpression::Function { .. } => Err(QueryError::unsupported(format!(
                "Function select ({expression})"
            ))),
            other => Err(QueryError::unsupported(format!(
                "{} in select",
                construct_name(other)
            ))),
        }
    }

    #[inline]
    fn convert(&self, node: &JsonValue) -> Value {
        Value::from_json_with(node, self.config.infer_temporal_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn whole_row_must_stand_alone() {
        let items = [ProjectionItem::WholeRow, ProjectionItem::column("name")];
        let error = SelectProjector::new(&items, QueryConfig::default()).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Selectors '.' cannot be combined with anything else"
        );
    }

    #[test]
    fn wildcard_keeps_field_order() {
        let items = [ProjectionItem::AllColumns];
        let projector = SelectProjector::new(&items, QueryConfig::default()).expect("valid");
        let row = projector
            .project(&json!({"name": "Daniel", "age": 38, "active": true}))
            .expect("projects");
        assert_eq!(row.names().collect::<Vec<_>>(), vec!["name", "age", "active"]);
    }

    #[test]
    fn lenient_config_yields_null() {
        let items = [ProjectionItem::column("missing")];
        let projector = SelectProjector::new(&items, QueryConfig::lenient()).expect("valid");
        let row = projector.project(&json!({"name": "Daniel"})).expect("lenient");
        assert_eq!(row.get("missing"), Some(&Value::Null));
    }
}
