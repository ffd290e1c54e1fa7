//! Result rows

use serde_json::Value as JsonValue;

use crate::value::Value;

/// Positional values of one result row, aligned with the result headers
///
/// Equality and hashing are structural over every column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ResultRow {
    values: Vec<Value>,
}

impl ResultRow {
    #[must_use]
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        JsonValue::Array(self.values.iter().map(Value::to_json).collect())
    }
}

impl From<Vec<Value>> for ResultRow {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}
