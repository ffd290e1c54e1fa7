//! End-to-end scenarios
//!
//! Queries run through the public `SqlJson` API against the documents in
//! `tests/fixtures/`.

use chrono::NaiveDate;
use sqljson::{
    ComparisonOp, FilterExpression as F, Literal, ProjectionItem, QueryClause, QueryError, SqlJson,
    SqlJsonError,
};

const SIMPLE: &str = include_str!("fixtures/simple-scenario.json");
const MULTIPLE_LIST: &str = include_str!("fixtures/multiple-list-scenario.json");
const IN_LIST: &str = include_str!("fixtures/in-list-scenario.json");
const NESTED: &str = include_str!("fixtures/nested.json");

const DANIEL_ROW: &str = r#"{"name":"Daniel","age":38,"weight":161.5,"vaccinated":true,"birthdate":"1982-11-30","lastModified":"2012-04-23T18:25:43.511Z"}"#;
const JOHN_ROW: &str = r#"{"name":"John","age":41,"weight":180,"vaccinated":false,"birthdate":"1978-01-30","lastModified":"1998-04-23T18:25:43.511Z"}"#;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn load(fixture: &str) -> SqlJson {
    init_logging();
    SqlJson::from_str(fixture).expect("fixture is valid JSON")
}

fn name_is(name: &str) -> F {
    F::equals(F::column("name"), F::literal(name))
}

/// Scenarios over the simple items document
#[cfg(test)]
mod simple_scenario_tests {
    use super::*;

    #[test]
    fn test_equals_filter_returning_star() {
        let query = QueryClause::builder("items")
            .filter(name_is("Daniel"))
            .select_all()
            .build();
        let mut result = load(SIMPLE).query(&query).expect("query runs");

        assert_eq!(result.len(), 1);
        assert!(result.advance());
        assert_eq!(result.get_string_by_name("name").expect("readable").as_deref(), Some("Daniel"));
        assert_eq!(result.get_i64_by_name("age"), Ok(Some(38)));
        assert_eq!(result.get_f64_by_name("weight"), Ok(Some(161.5)));
        assert_eq!(result.get_bool_by_name("vaccinated"), Ok(Some(true)));
    }

    #[test]
    fn test_column_order_follows_select_list() {
        let orders = vec![("name", "age"), ("age", "name")];
        for (first, second) in orders {
            let query = QueryClause::builder("items")
                .filter(name_is("Daniel"))
                .select_column(first)
                .select_column(second)
                .build();
            let result = load(SIMPLE).query(&query).expect("query runs");
            assert_eq!(result.column_names(), [first, second]);
        }
    }

    #[test]
    fn test_whole_row_renders_original_json() {
        let query = QueryClause::builder("items").select_row().build();
        let mut result = load(SIMPLE).query(&query).expect("query runs");

        assert_eq!(result.len(), 2);
        assert!(result.advance());
        assert_eq!(result.get_string_by_name(".").expect("readable").as_deref(), Some(DANIEL_ROW));
        assert!(result.advance());
        assert_eq!(result.get_string(0).expect("readable").as_deref(), Some(JOHN_ROW));
    }

    #[test]
    fn test_date_literal_filter() {
        let birthdate = NaiveDate::from_ymd_opt(1982, 11, 30).expect("valid date");
        let query = QueryClause::builder("items")
            .filter(F::equals(
                F::column("birthdate"),
                F::Literal { value: Literal::Date(birthdate) },
            ))
            .select_row()
            .build();
        let mut result = load(SIMPLE).query(&query).expect("query runs");

        assert_eq!(result.len(), 1);
        assert!(result.advance());
        assert_eq!(result.get_string(0).expect("readable").as_deref(), Some(DANIEL_ROW));
    }

    #[test]
    fn test_aliases_and_negation() {
        let query = QueryClause::builder("items")
            .filter(F::not(F::parenthesis(name_is("Daniel"))))
            .select_column("name")
            .select(ProjectionItem::aliased("name", "alternate_name"))
            .select_column("age")
            .build();
        let mut result = load(SIMPLE).query(&query).expect("query runs");

        assert_eq!(result.column_names(), ["name", "alternate_name", "age"]);
        assert!(result.advance());
        assert_eq!(result.get_string_by_name("alternate_name").expect("readable").as_deref(), Some("John"));
        assert_eq!(result.get_i64_by_name("age"), Ok(Some(41)));
        assert!(!result.advance());
    }

    #[test]
    fn test_numeric_filters() {
        let sql_json = load(SIMPLE);
        let cases = vec![
            (F::compare(F::column("age"), ComparisonOp::Greater, F::literal(37)), 2),
            (F::compare(F::column("age"), ComparisonOp::Less, F::literal(40)), 1),
            (F::equals(F::column("weight"), F::literal(180.0)), 1),
            (F::between(F::column("weight"), F::literal(160), F::literal(179.9)), 1),
        ];
        for (filter, expected) in cases {
            let query = QueryClause::builder("items")
                .filter(filter)
                .select_column("name")
                .build();
            assert_eq!(sql_json.query(&query).expect("query runs").len(), expected, "{query}");
        }
    }

    #[test]
    fn test_invalid_selectors_and_columns() {
        let sql_json = load(SIMPLE);

        let combined = QueryClause::builder("items")
            .filter(name_is("Daniel"))
            .select_row()
            .select_column("name")
            .build();
        let error = sql_json.query(&combined).unwrap_err();
        assert_eq!(error.to_string(), "Selectors '.' cannot be combined with anything else");

        let missing = QueryClause::builder("items")
            .filter(name_is("Daniel"))
            .select_column("invalid")
            .build();
        let error = sql_json.query(&missing).unwrap_err();
        assert_eq!(error.as_query_error(), Some(&QueryError::column_not_found("invalid")));
    }

    #[test]
    fn test_between_on_text_field() {
        let query = QueryClause::builder("items")
            .filter(F::between(F::column("name"), F::literal(160), F::literal(179.9)))
            .select_all()
            .build();
        let error = load(SIMPLE).query(&query).unwrap_err();
        assert_eq!(error.to_string(), "cannot perform between for Text");
    }
}

/// Table paths, multi-value columns and IN
#[cfg(test)]
mod document_shape_tests {
    use super::*;

    #[test]
    fn test_invalid_tables() {
        let cases = vec![
            (SIMPLE, "invalid", "Cannot find element 'invalid'"),
            (SIMPLE, "items.invalid", "Cannot find element 'invalid' from 'items.invalid'"),
            (
                MULTIPLE_LIST,
                "levels.elements.invalid",
                "Cannot find element 'invalid' from 'levels.elements.invalid'",
            ),
            (MULTIPLE_LIST, "levels.name.invalid", "Cannot find element 'levels.name.invalid'"),
        ];
        for (fixture, table, message) in cases {
            let query = QueryClause::builder(table)
                .filter(name_is("Daniel"))
                .select_all()
                .build();
            let error = load(fixture).query(&query).unwrap_err();
            assert_eq!(error.to_string(), message, "table {table}");
        }
    }

    #[test]
    fn test_nested_table_elements() {
        let query = QueryClause::builder("levels.elements")
            .filter(F::compare(F::column("order"), ComparisonOp::GreaterEq, F::literal(2)))
            .select_column("name")
            .build();
        let mut result = load(MULTIPLE_LIST).query(&query).expect("query runs");

        let mut names = Vec::new();
        while result.advance() {
            names.push(result.get_string(0).expect("readable").unwrap_or_default());
        }
        assert_eq!(names, vec!["Level1Element2", "Level2Element1", "Level2Element2"]);
    }

    #[test]
    fn test_match_any_and_match_all() {
        let sql_json = load(MULTIPLE_LIST);
        let cases = vec![
            (F::match_any("elements.order"), vec!["level1", "level2"]),
            (F::match_all("elements.order"), vec!["level2"]),
        ];
        for (column, expected) in cases {
            let query = QueryClause::builder("levels")
                .filter(F::compare(column, ComparisonOp::Greater, F::literal(1)))
                .select_column("name")
                .build();
            let result = sql_json.query(&query).expect("query runs");
            let names: Vec<_> = result.rows().iter().map(|row| row.values()[0].to_string()).collect();
            assert_eq!(names, expected, "{query}");
        }
    }

    #[test]
    fn test_match_with_wrong_type() {
        let query = QueryClause::builder("levels")
            .filter(F::equals(F::match_any("elements.name"), F::literal(2)))
            .select_column("name")
            .build();
        let error = load(MULTIPLE_LIST).query(&query).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid types in expression Level1Element1(Text) = 2(Integer)"
        );
    }

    #[test]
    fn test_in_department_list() {
        let sql_json = load(IN_LIST);
        let cases = vec![
            (false, vec!["Daniel", "Mary"]),
            (true, vec!["John"]),
        ];
        for (negated, expected) in cases {
            let query = QueryClause::builder("employees")
                .filter(F::in_list(F::literal("IT"), F::column("departments"), negated))
                .select_column("name")
                .build();
            let result = sql_json.query(&query).expect("query runs");
            let names: Vec<_> = result.rows().iter().map(|row| row.values()[0].to_string()).collect();
            assert_eq!(names, expected);
        }
    }

    #[test]
    fn test_nested_object_columns() {
        let query = QueryClause::builder(".")
            .select_column("body.hair.color")
            .select_column("body.height")
            .build();
        let mut result = load(NESTED).query(&query).expect("query runs");

        assert!(result.advance());
        assert_eq!(result.get_string_by_name("body.hair.color").expect("readable").as_deref(), Some("brown"));
        assert_eq!(result.get_i64_by_name("body.height"), Ok(Some(180)));
    }
}

/// Document sources, configuration and error wrapping
#[cfg(test)]
mod api_surface_tests {
    use super::*;

    #[test]
    fn test_query_in_json_form() {
        let clause = r#"{
            "root_path": "items",
            "filter": {
                "kind": "comparison",
                "left": {"kind": "column", "name": "age"},
                "operator": "greater",
                "right": {"kind": "literal", "value": {"type": "integer", "value": 40}}
            },
            "projections": [{"kind": "expression", "expression": {"kind": "column", "name": "name"}}],
            "distinct": true
        }"#;
        let mut result = load(SIMPLE).query_json(clause).expect("query runs");
        assert!(result.advance());
        assert_eq!(result.get_string(0).expect("readable").as_deref(), Some("John"));
    }

    #[test]
    fn test_builder_lenient_projection() {
        init_logging();
        let sql_json = SqlJson::builder()
            .strict_result_row_existence(false)
            .parse(NESTED)
            .expect("valid document");
        assert!(!sql_json.config().strict_result_row_existence);

        let query = QueryClause::builder("body").select_column("eyes").build();
        let mut result = sql_json.query(&query).expect("lenient query runs");
        assert!(result.advance());
        assert_eq!(result.get_string(0), Ok(None));
    }

    #[test]
    fn test_temporal_inference_can_be_disabled() {
        init_logging();
        let birthdate = NaiveDate::from_ymd_opt(1982, 11, 30).expect("valid date");
        let query = QueryClause::builder("items")
            .filter(F::equals(
                F::column("birthdate"),
                F::Literal { value: Literal::Date(birthdate) },
            ))
            .select_column("name")
            .build();

        let sql_json = SqlJson::builder()
            .temporal_inference(false)
            .parse(SIMPLE)
            .expect("valid document");
        let error = sql_json.query(&query).unwrap_err();
        assert!(matches!(error.as_query_error(), Some(QueryError::TypeMismatch { .. })));
    }

    #[test]
    fn test_from_reader() {
        init_logging();
        let sql_json = SqlJson::from_reader(NESTED.as_bytes()).expect("valid document");
        assert_eq!(sql_json.document()["body"]["hair"]["color"], "brown");
    }

    #[test]
    fn test_error_wrapping() {
        init_logging();
        assert!(matches!(SqlJson::from_str("{\"items\": ["), Err(SqlJsonError::Json(_))));
        assert!(matches!(
            SqlJson::from_path("fixtures/does-not-exist.json"),
            Err(SqlJsonError::Io(_))
        ));

        let sql_json = load(SIMPLE);
        assert!(matches!(sql_json.query_json("{\"root_path\": 1}"), Err(SqlJsonError::Json(_))));
        let error = sql_json
            .query(&QueryClause::builder("items").build())
            .unwrap_err();
        assert!(matches!(
            error.as_query_error(),
            Some(QueryError::InvalidProjection(_))
        ));
    }
}
