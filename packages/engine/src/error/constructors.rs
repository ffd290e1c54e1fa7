//! Error constructor functions
//!
//! Factory methods that keep message formatting for evaluation errors in one place.

use super::types::QueryError;
use crate::value::Value;

impl QueryError {
    /// Creates a missing-element error naming the complete path expression
    pub fn element_not_found(expression: impl Into<String>) -> Self {
        Self::ElementNotFound {
            element: expression.into(),
            expression: None,
        }
    }

    /// Creates a missing-element error for a sub-path of a larger expression
    ///
    /// # Examples
    /// ```
    /// use sqljson_engine::QueryError;
    ///
    /// let error = QueryError::element_not_found_within("invalid", "items.invalid");
    /// assert_eq!(error.to_string(), "Cannot find element 'invalid' from 'items.invalid'");
    /// ```
    pub fn element_not_found_within(
        element: impl Into<String>,
        expression: impl Into<String>,
    ) -> Self {
        Self::ElementNotFound {
            element: element.into(),
            expression: Some(expression.into()),
        }
    }

    pub fn column_not_found(column: impl Into<String>) -> Self {
        Self::ColumnNotFound {
            column: column.into(),
        }
    }

    /// Creates a type mismatch error from the two offending operands
    #[must_use]
    pub fn type_mismatch(left: &Value, operator: &str, right: &Value) -> Self {
        Self::TypeMismatch {
            left: left.to_string(),
            left_type: left.value_type(),
            operator: operator.to_string(),
            right: right.to_string(),
            right_type: right.value_type(),
        }
    }

    #[must_use]
    pub fn unsupported_type(value: &Value, operator: &str) -> Self {
        Self::UnsupportedType {
            value_type: value.value_type(),
            operator: operator.to_string(),
        }
    }

    #[must_use]
    pub fn non_numeric_between(value: &Value) -> Self {
        Self::NonNumericBetween {
            value_type: value.value_type(),
        }
    }

    /// Creates an unsupported-expression error naming the construct
    pub fn unsupported(construct: impl Into<String>) -> Self {
        let construct = construct.into();
        tracing::warn!(
            target: "sqljson::filter",
            construct = %construct,
            "Attempt to use unsupported expression"
        );
        Self::UnsupportedExpression { construct }
    }

    pub fn invalid_projection(message: impl Into<String>) -> Self {
        Self::InvalidProjection(message.into())
    }

    pub fn invalid_function_argument(message: impl Into<String>) -> Self {
        Self::InvalidFunctionArgument(message.into())
    }

    #[must_use]
    pub fn division_by_zero(left: &Value, right: &Value) -> Self {
        Self::DivisionByZero {
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    /// Whether this error reports a path that is absent from the document
    #[must_use]
    pub fn is_missing_path(&self) -> bool {
        matches!(
            self,
            Self::ElementNotFound { .. } | Self::ColumnNotFound { .. }
        )
    }
}
