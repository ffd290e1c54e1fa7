//! Value model tests
//!
//! Tests for JSON conversion, temporal inference and numeric promotion,
//! mirroring src/value/

use chrono::{NaiveDate, NaiveTime};
use serde_json::json;
use sqljson_engine::value::promotion::promote_among;
use sqljson_engine::{QueryError, Value, ValueType};
use sqljson_engine::value::{NumericPair, promoted_equals, validate_matching};

/// JSON node conversion
#[cfg(test)]
mod conversion_tests {
    use super::*;

    #[test]
    fn test_scalar_conversions() {
        let cases = vec![
            (json!(38), ValueType::Integer),
            (json!(161.5), ValueType::Float),
            (json!(u64::MAX), ValueType::Float),
            (json!(true), ValueType::Boolean),
            (json!(null), ValueType::Null),
            (json!("Daniel"), ValueType::Text),
            (json!("2012-04-23T18:25:43.511Z"), ValueType::Instant),
            (json!("2012-04-23T18:25:43"), ValueType::LocalDateTime),
            (json!("2012-04-23T18:25"), ValueType::LocalDateTime),
            (json!("1982-11-30"), ValueType::LocalDate),
            (json!("18:25:43"), ValueType::LocalTime),
            (json!("18:25"), ValueType::LocalTime),
            (json!([1, 2]), ValueType::List),
            (json!({"a": 1}), ValueType::Object),
        ];

        for (node, expected) in cases {
            let value = Value::from_json(&node);
            assert_eq!(value.value_type(), expected, "converting {node}");
        }
    }

    #[test]
    fn test_non_iso_text_stays_text() {
        let cases = vec![
            "16:9",
            "1:2",
            "9:5:7",
            "12:00:60",
            "18:25:43.",
            "2012-4-3",
            "2012-04-23 18:25:43",
            "2012-04-23T1:2",
            "2012-04-23T18:25:43+0200",
            "Daniel",
        ];

        for text in cases {
            assert_eq!(
                Value::from_json(&json!(text)),
                Value::Text(text.to_string()),
                "converting {text:?}"
            );
        }
    }

    #[test]
    fn test_time_text_converts_to_time() {
        assert_eq!(
            Value::from_json(&json!("18:25:43")),
            Value::LocalTime(NaiveTime::from_hms_opt(18, 25, 43).expect("valid time"))
        );
    }

    #[test]
    fn test_object_keeps_field_order() {
        let value = Value::from_json(&json!({"z": 1, "a": 2, "m": 3}));
        let Value::Object(fields) = value else {
            panic!("expected object");
        };
        let names: Vec<_> = fields.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_row_round_trips_through_json() {
        let row = json!({
            "name": "Daniel",
            "weight": 161.5,
            "vaccinated": true,
            "birthdate": "1982-11-30",
            "lastModified": "2012-04-23T18:25:43.511Z",
            "tags": ["a", "b"],
            "spouse": null
        });
        assert_eq!(Value::from_json(&row).to_json(), row);
    }

    #[test]
    fn test_date_display() {
        let date = NaiveDate::from_ymd_opt(1982, 11, 30).expect("valid date");
        assert_eq!(Value::LocalDate(date).to_string(), "1982-11-30");
    }
}

/// Promotion and type matching
#[cfg(test)]
mod promotion_tests {
    use super::*;

    #[test]
    fn test_promotion_pairs() {
        assert_eq!(
            NumericPair::promote(&Value::Integer(1), &Value::Integer(2)),
            Some(NumericPair::Integers(1, 2))
        );
        assert_eq!(
            NumericPair::promote(&Value::Float(1.5), &Value::Integer(2)),
            Some(NumericPair::Floats(1.5, 2.0))
        );
        assert_eq!(NumericPair::promote(&Value::Null, &Value::Integer(2)), None);
    }

    #[test]
    fn test_promoted_equality() {
        assert!(promoted_equals(&Value::Integer(180), &Value::Float(180.0)));
        assert!(!promoted_equals(&Value::from("180"), &Value::Integer(180)));
    }

    #[test]
    fn test_type_mismatch_message() {
        let error =
            validate_matching(&Value::from("Level1Element1"), &Value::Integer(2), "=").unwrap_err();
        assert!(matches!(error, QueryError::TypeMismatch { .. }));
        assert_eq!(
            error.to_string(),
            "Invalid types in expression Level1Element1(Text) = 2(Integer)"
        );
    }

    #[test]
    fn test_promote_among_widens_only_with_float_peer() {
        assert_eq!(
            promote_among(&Value::Integer(170), &[&Value::Integer(160), &Value::Float(179.9)]),
            Value::Float(170.0)
        );
        assert_eq!(
            promote_among(&Value::from("x"), &[&Value::Float(1.0)]),
            Value::from("x")
        );
    }
}
