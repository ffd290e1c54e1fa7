//! Result set assembly
//!
//! Headers come from the first projected row. Every row is then laid out in
//! header order; projected rows are expected to share one column layout, and a
//! name a row lacks reads as `Null`.

use hashbrown::HashSet;

use super::row::ResultRow;
use super::set::ResultSet;
use crate::select::ProjectedRow;
use crate::value::Value;

#[derive(Debug, Clone, Default)]
pub struct ResultSetBuilder {
    headers: Vec<String>,
    rows: Vec<ResultRow>,
}

impl ResultSetBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder for the given projected rows; no rows means no headers
    #[must_use]
    pub fn from_projected(projected: Vec<ProjectedRow>) -> Self {
        let mut builder = Self::new();
        let Some(first) = projected.first() else {
            tracing::debug!(target: "sqljson::result", "No rows produced, result is header-less");
            return builder;
        };
        builder.headers = first.names().map(str::to_string).collect();

        for mut row in projected {
            let values = builder
                .headers
                .iter()
                .map(|name| row.take(name).unwrap_or(Value::Null))
                .collect::<Vec<_>>();
            builder.rows.push(ResultRow::new(values));
        }
        builder
    }

    /// Appends a header, ignoring names already present
    #[must_use]
    pub fn header(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.headers.contains(&name) {
            self.headers.push(name);
        }
        self
    }

    #[must_use]
    pub fn row(mut self, values: Vec<Value>) -> Self {
        self.rows.push(ResultRow::new(values));
        self
    }

    /// Drops structurally equal rows, keeping first occurrences in order
    pub fn apply_distinct(&mut self) {
        let before = self.rows.len();
        let mut seen = HashSet::with_capacity(before);
        self.rows.retain(|row| seen.insert(row.clone()));
        tracing::debug!(
            target: "sqljson::result",
            before = before,
            after = self.rows.len(),
            "Applied distinct"
        );
    }

    #[must_use]
    pub fn build(self) -> ResultSet {
        ResultSet::new(self.headers, self.rows)
    }
}
