//! Core value types
//!
//! `Value` is the universal runtime type for anything extracted from a JSON
//! document, written as a literal, or produced by arithmetic.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};

use super::multi_column::MultiValueColumn;

/// Tagged runtime value
#[derive(Debug, Clone)]
pub enum Value {
    /// Whole number
    Integer(i64),
    /// Fractional number
    Float(f64),
    /// Text that did not parse as any temporal type
    Text(String),
    Boolean(bool),
    /// Point on the UTC time-line (`2012-04-23T18:25:43.511Z`)
    Instant(DateTime<Utc>),
    /// Date and time without offset (`2012-04-23T18:25:43`)
    LocalDateTime(NaiveDateTime),
    /// Calendar date (`1982-11-30`)
    LocalDate(NaiveDate),
    /// Wall-clock time (`18:25:43`)
    LocalTime(NaiveTime),
    Null,
    /// Converted JSON array
    List(Vec<Value>),
    /// Converted JSON object, fields in document order
    Object(Vec<(String, Value)>),
    /// Candidate values of a path that crossed an array
    MultiValue(MultiValueColumn),
}

/// Concrete runtime type of a `Value`, used in error messages and type checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Integer,
    Float,
    Text,
    Boolean,
    Instant,
    LocalDateTime,
    LocalDate,
    LocalTime,
    Null,
    List,
    Object,
    MultiValue,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Integer => "Integer",
            ValueType::Float => "Float",
            ValueType::Text => "Text",
            ValueType::Boolean => "Boolean",
            ValueType::Instant => "Instant",
            ValueType::LocalDateTime => "LocalDateTime",
            ValueType::LocalDate => "LocalDate",
            ValueType::LocalTime => "LocalTime",
            ValueType::Null => "Null",
            ValueType::List => "List",
            ValueType::Object => "Object",
            ValueType::MultiValue => "MultiValue",
        };
        f.write_str(name)
    }
}

impl Value {
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Integer(_) => ValueType::Integer,
            Value::Float(_) => ValueType::Float,
            Value::Text(_) => ValueType::Text,
            Value::Boolean(_) => ValueType::Boolean,
            Value::Instant(_) => ValueType::Instant,
            Value::LocalDateTime(_) => ValueType::LocalDateTime,
            Value::LocalDate(_) => ValueType::LocalDate,
            Value::LocalTime(_) => ValueType::LocalTime,
            Value::Null => ValueType::Null,
            Value::List(_) => ValueType::List,
            Value::Object(_) => ValueType::Object,
            Value::MultiValue(_) => ValueType::MultiValue,
        }
    }

    /// True only for `Integer` and `Float`
    #[inline]
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }

    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            // Bit equality keeps `Eq` and `Hash` consistent
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Instant(a), Value::Instant(b)) => a == b,
            (Value::LocalDateTime(a), Value::LocalDateTime(b)) => a == b,
            (Value::LocalDate(a), Value::LocalDate(b)) => a == b,
            (Value::LocalTime(a), Value::LocalTime(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::MultiValue(a), Value::MultiValue(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Integer(i) => i.hash(state),
            Value::Float(f) => f.to_bits().hash(state),
            Value::Text(s) => s.hash(state),
            Value::Boolean(b) => b.hash(state),
            Value::Instant(t) => t.hash(state),
            Value::LocalDateTime(t) => t.hash(state),
            Value::LocalDate(d) => d.hash(state),
            Value::LocalTime(t) => t.hash(state),
            Value::Null => {}
            Value::List(items) => items.hash(state),
            Value::Object(fields) => fields.hash(state),
            Value::MultiValue(multi) => multi.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Instant(t) => f.write_str(&t.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Value::LocalDateTime(t) => write!(f, "{}", t.format("%Y-%m-%dT%H:%M:%S%.f")),
            Value::LocalDate(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::LocalTime(t) => write!(f, "{}", t.format("%H:%M:%S%.f")),
            Value::Null => f.write_str("null"),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Object(_) => write!(f, "{}", self.to_json()),
            Value::MultiValue(multi) => write!(f, "{multi}"),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}
