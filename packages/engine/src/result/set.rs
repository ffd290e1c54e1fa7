//! Materialized result set with cursor access
//!
//! The cursor starts before the first row. Column indices are zero-based;
//! column names resolve by a linear scan over the headers. Typed getters read
//! `Null` cells as `Ok(None)` and refuse values of another type.

use serde_json::{Map, Value as JsonValue};

use super::row::ResultRow;
use crate::error::AccessError;
use crate::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    headers: Vec<String>,
    rows: Vec<ResultRow>,
    cursor: Option<usize>,
}

impl ResultSet {
    pub(crate) fn new(headers: Vec<String>, rows: Vec<ResultRow>) -> Self {
        Self {
            headers,
            rows,
            cursor: None,
        }
    }

    /// An empty, header-less result
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// Random access to a row, independent of the cursor
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&ResultRow> {
        self.rows.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Zero-based cursor position, `None` while before the first row
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.cursor
    }

    /// Moves to the next row; false when already on the last one
    pub fn advance(&mut self) -> bool {
        let next = self.cursor.map_or(0, |current| current + 1);
        if next < self.rows.len() {
            self.cursor = Some(next);
            true
        } else {
            false
        }
    }

    /// Moves to the previous row; false on the first row or before it
    pub fn retreat(&mut self) -> bool {
        match self.cursor {
            Some(current) if current > 0 => {
                self.cursor = Some(current - 1);
                true
            }
            _ => false,
        }
    }

    /// Puts the cursor back before the first row
    pub fn reset(&mut self) {
        self.cursor = None;
    }

    pub fn current_row(&self) -> Result<&ResultRow, AccessError> {
        self.cursor
            .and_then(|index| self.rows.get(index))
            .ok_or(AccessError::NoCurrentRow)
    }

    /// Zero-based index of the column labelled `label`
    pub fn find_column(&self, label: &str) -> Result<usize, AccessError> {
        self.headers
            .iter()
            .position(|header| header == label)
            .ok_or_else(|| AccessError::UnknownColumn(label.to_string()))
    }

    /// Raw value at `index` of the current row, `Null` included
    pub fn get_value(&self, index: usize) -> Result<&Value, AccessError> {
        let row = self.current_row()?;
        row.get(index).ok_or(AccessError::ColumnIndexOutOfRange {
            index,
            width: self.headers.len(),
        })
    }

    pub fn get_value_by_name(&self, label: &str) -> Result<&Value, AccessError> {
        self.get_value(self.find_column(label)?)
    }

    pub fn get_i64(&self, index: usize) -> Result<Option<i64>, AccessError> {
        match self.get_value(index)? {
            Value::Null => Ok(None),
            Value::Integer(i) => Ok(Some(*i)),
            other => Err(self.invalid_type(index, other, "i64")),
        }
    }

    pub fn get_i64_by_name(&self, label: &str) -> Result<Option<i64>, AccessError> {
        self.get_i64(self.find_column(label)?)
    }

    /// Reads a numeric cell as `f64`; integers are widened
    pub fn get_f64(&self, index: usize) -> Result<Option<f64>, AccessError> {
        match self.get_value(index)? {
            Value::Null => Ok(None),
            Value::Float(f) => Ok(Some(*f)),
            Value::Integer(i) => Ok(Some(*i as f64)),
            other => Err(self.invalid_type(index, other, "f64")),
        }
    }

    pub fn get_f64_by_name(&self, label: &str) -> Result<Option<f64>, AccessError> {
        self.get_f64(self.find_column(label)?)
    }

    pub fn get_bool(&self, index: usize) -> Result<Option<bool>, AccessError> {
        match self.get_value(index)? {
            Value::Null => Ok(None),
            Value::Boolean(b) => Ok(Some(*b)),
            other => Err(self.invalid_type(index, other, "bool")),
        }
    }

    pub fn get_bool_by_name(&self, label: &str) -> Result<Option<bool>, AccessError> {
        self.get_bool(self.find_column(label)?)
    }

    /// Renders any cell as text
    ///
    /// Temporal values come back in ISO-8601 form; lists and objects as JSON.
    pub fn get_string(&self, index: usize) -> Result<Option<String>, AccessError> {
        Ok(match self.get_value(index)? {
            Value::Null => None,
            Value::Text(s) => Some(s.clone()),
            nested @ (Value::List(_) | Value::Object(_) | Value::MultiValue(_)) => {
                Some(nested.to_json().to_string())
            }
            other => Some(other.to_string()),
        })
    }

    pub fn get_string_by_name(&self, label: &str) -> Result<Option<String>, AccessError> {
        self.get_string(self.find_column(label)?)
    }

    /// Every row as a JSON object keyed by column name, in result order
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        JsonValue::Array(
            self.rows
                .iter()
                .map(|row| {
                    let fields = self
                        .headers
                        .iter()
                        .zip(row.values())
                        .map(|(name, value)| (name.clone(), value.to_json()))
                        .collect::<Map<String, JsonValue>>();
                    JsonValue::Object(fields)
                })
                .collect(),
        )
    }

    fn invalid_type(&self, index: usize, value: &Value, requested: &'static str) -> AccessError {
        AccessError::InvalidColumnType {
            column: self
                .headers
                .get(index)
                .cloned()
                .unwrap_or_else(|| index.to_string()),
            actual: value.value_type(),
            requested,
        }
    }
}

impl Default for ResultSet {
    fn default() -> Self {
        Self::empty()
    }
}
