//! SELECT projection tests
//!
//! Tests for column, alias, wildcard and whole-row projection, mirroring src/select/

use serde_json::{Value as JsonValue, json};
use sqljson_engine::ast::{FilterExpression, ProjectionItem};
use sqljson_engine::select::SelectProjector;
use sqljson_engine::{QueryConfig, QueryError, Value};

fn row() -> JsonValue {
    json!({
        "name": "Daniel",
        "age": 38,
        "body": {"hair": {"color": "brown"}}
    })
}

#[cfg(test)]
mod projection_tests {
    use super::*;

    #[test]
    fn test_column_named_by_path_or_alias() {
        let items = vec![
            ProjectionItem::column("body.hair.color"),
            ProjectionItem::aliased("name", "first_name"),
        ];
        let projector = SelectProjector::new(&items, QueryConfig::default()).expect("valid list");
        let projected = projector.project(&row()).expect("projects");

        assert_eq!(
            projected.names().collect::<Vec<_>>(),
            vec!["body.hair.color", "first_name"]
        );
        assert_eq!(projected.get("body.hair.color"), Some(&Value::from("brown")));
    }

    #[test]
    fn test_wildcard_then_column() {
        let items = vec![ProjectionItem::AllColumns, ProjectionItem::column("body.hair.color")];
        let projector = SelectProjector::new(&items, QueryConfig::default()).expect("valid list");
        let projected = projector.project(&row()).expect("projects");
        assert_eq!(
            projected.names().collect::<Vec<_>>(),
            vec!["name", "age", "body", "body.hair.color"]
        );
    }

    #[test]
    fn test_whole_row_round_trip() {
        let items = vec![ProjectionItem::WholeRow];
        let projector = SelectProjector::new(&items, QueryConfig::default()).expect("valid list");
        let projected = projector.project(&row()).expect("projects");
        let whole = projected.get(".").expect("whole row column");
        assert_eq!(whole.to_json(), row());
    }

    #[test]
    fn test_invalid_lists() {
        let cases = vec![
            vec![],
            vec![ProjectionItem::WholeRow, ProjectionItem::column("name")],
            vec![ProjectionItem::column("name"), ProjectionItem::WholeRow],
        ];
        for items in cases {
            let error = SelectProjector::new(&items, QueryConfig::default()).unwrap_err();
            assert!(matches!(error, QueryError::InvalidProjection(_)), "{items:?}");
        }
    }

    #[test]
    fn test_missing_column_strict_and_lenient() {
        let items = vec![ProjectionItem::column("body.eyes")];

        let strict = SelectProjector::new(&items, QueryConfig::default()).expect("valid list");
        assert_eq!(
            strict.project(&row()).unwrap_err(),
            QueryError::column_not_found("body.eyes")
        );

        let lenient = SelectProjector::new(&items, QueryConfig::lenient()).expect("valid list");
        let projected = lenient.project(&row()).expect("lenient");
        assert_eq!(projected.get("body.eyes"), Some(&Value::Null));
    }

    #[test]
    fn test_unsupported_items() {
        let items = vec![ProjectionItem::Expression {
            expression: FilterExpression::function("upper", vec![FilterExpression::column("name")]),
            alias: None,
        }];
        let projector = SelectProjector::new(&items, QueryConfig::default()).expect("valid list");
        assert_eq!(
            projector.project(&row()).unwrap_err().to_string(),
            "Expression Function select (upper(name)) not yet supported"
        );

        let items = vec![ProjectionItem::TableWildcard { table: "people".into() }];
        let projector = SelectProjector::new(&items, QueryConfig::default()).expect("valid list");
        assert!(matches!(
            projector.project(&row()),
            Err(QueryError::UnsupportedExpression { .. })
        ));
    }
}
