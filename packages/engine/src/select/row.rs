//! Projected row: ordered column name to value mapping

use crate::value::Value;

/// One row after projection, columns in first-insertion order
///
/// Inserting an existing name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectedRow {
    columns: Vec<(String, Value)>,
}

impl ProjectedRow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match self.columns.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.columns.push((name, value)),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Removes the value stored under `name`, leaving `Null` behind
    pub fn take(&mut self, name: &str) -> Option<Value> {
        self.columns
            .iter_mut()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| std::mem::replace(value, Value::Null))
    }
}
