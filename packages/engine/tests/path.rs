//! Path resolution tests
//!
//! Tests for dotted path navigation, mirroring src/path/

use serde_json::{Value as JsonValue, json};
use sqljson_engine::QueryError;
use sqljson_engine::path::{MultiColumnCollector, PathResolver};

fn levels_document() -> JsonValue {
    json!({
        "levels": [
            {"name": "level1", "elements": [{"order": 1}, {"order": 2}]},
            {"name": "level2", "elements": [{"order": 3}, {"order": 4}]}
        ]
    })
}

/// Strict and lenient resolution
#[cfg(test)]
mod path_resolution_tests {
    use super::*;

    #[test]
    fn test_root_path_returns_document() {
        let doc = json!([{"name": "Daniel"}]);
        let found = PathResolver::resolve(&doc, ".", false).expect("root resolves");
        assert_eq!(*found, doc);
    }

    #[test]
    fn test_nested_object_path() {
        let doc = json!({"body": {"hair": {"color": "brown"}}});
        let found = PathResolver::resolve(&doc, "body.hair", false).expect("resolves");
        assert_eq!(*found, json!({"color": "brown"}));
    }

    #[test]
    fn test_array_flattening_wraps_results() {
        let doc = levels_document();
        let found = PathResolver::resolve(&doc, "levels.name", false).expect("resolves");
        assert_eq!(*found, json!(["level1", "level2"]));

        let nested =
            PathResolver::resolve(&doc, "levels.elements.order", false).expect("resolves");
        assert_eq!(*nested, json!([[1, 2], [3, 4]]));
    }

    #[test]
    fn test_array_elements_missing_field_are_skipped() {
        let doc = json!({"items": [{"name": "a"}, {"other": 1}, {"name": "c"}]});
        let found = PathResolver::resolve(&doc, "items.name", false).expect("resolves");
        assert_eq!(*found, json!(["a", "c"]));
    }

    #[test]
    fn test_missing_path_messages() {
        let items = json!({"items": [{"name": "a"}, {"name": "b"}]});
        let cases = vec![
            (json!({"name": "a"}), "invalid", "Cannot find element 'invalid'"),
            (items, "items.invalid", "Cannot find element 'invalid' from 'items.invalid'"),
            (
                levels_document(),
                "levels.elements.invalid",
                "Cannot find element 'invalid' from 'levels.elements.invalid'",
            ),
            (
                levels_document(),
                "levels.name.invalid",
                "Cannot find element 'levels.name.invalid'",
            ),
        ];

        for (doc, path, expected) in cases {
            let error = PathResolver::resolve(&doc, path, false).expect_err(path);
            assert!(matches!(error, QueryError::ElementNotFound { .. }));
            assert_eq!(error.to_string(), expected, "path {path}");
        }
    }

    #[test]
    fn test_lenient_resolution_never_fails() {
        let doc = json!({"items": [{"name": "a"}]});
        assert_eq!(
            *PathResolver::resolve(&doc, "missing.deeper", true).expect("lenient"),
            JsonValue::Null
        );
        assert_eq!(
            *PathResolver::resolve(&doc, "items.invalid", true).expect("lenient"),
            json!([])
        );
    }
}

/// Multi-value collection for matchAny / matchAll
#[cfg(test)]
mod multi_column_tests {
    use super::*;

    #[test]
    fn test_collects_through_every_array_level() {
        let doc = levels_document();
        let found =
            MultiColumnCollector::collect(&doc, "levels.elements.order").expect("collects");
        assert_eq!(found, vec![&json!(1), &json!(2), &json!(3), &json!(4)]);
    }

    #[test]
    fn test_row_that_is_an_array_is_flattened() {
        let doc = json!([{"tag": "x"}, {"tag": "y"}]);
        let found = MultiColumnCollector::collect(&doc, "tag").expect("collects");
        assert_eq!(found, vec![&json!("x"), &json!("y")]);
    }

    #[test]
    fn test_missing_branch_is_strict() {
        let doc = json!({"levels": [{"elements": [{"order": 1}]}, {"name": "no elements"}]});
        let error = MultiColumnCollector::collect(&doc, "levels.elements.order").unwrap_err();
        assert!(error.is_missing_path());
    }
}
