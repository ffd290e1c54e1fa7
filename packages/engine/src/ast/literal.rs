//! Literal values written in a query

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Query literal, each variant maps to exactly one `Value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Literal {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
    /// `{d '1982-11-30'}`
    Date(NaiveDate),
    /// `{t '18:25:43'}`
    Time(NaiveTime),
    /// `{ts '2012-04-23 18:25:43'}`
    Timestamp(NaiveDateTime),
}

impl Literal {
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Literal::String(s) => Value::Text(s.clone()),
            Literal::Integer(i) => Value::Integer(*i),
            Literal::Float(f) => Value::Float(*f),
            Literal::Boolean(b) => Value::Boolean(*b),
            Literal::Null => Value::Null,
            Literal::Date(d) => Value::LocalDate(*d),
            Literal::Time(t) => Value::LocalTime(*t),
            Literal::Timestamp(t) => Value::LocalDateTime(*t),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "'{s}'"),
            Literal::Integer(i) => write!(f, "{i}"),
            Literal::Float(n) => write!(f, "{n}"),
            Literal::Boolean(b) => write!(f, "{b}"),
            Literal::Null => f.write_str("NULL"),
            Literal::Date(_) => write!(f, "{{d '{}'}}", self.to_value()),
            Literal::Time(_) => write!(f, "{{t '{}'}}", self.to_value()),
            Literal::Timestamp(_) => write!(f, "{{ts '{}'}}", self.to_value()),
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Integer(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Integer(i64::from(value))
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Boolean(value)
    }
}

impl From<NaiveDate> for Literal {
    fn from(value: NaiveDate) -> Self {
        Literal::Date(value)
    }
}
