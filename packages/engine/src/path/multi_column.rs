//! Multi-value path collection
//!
//! Used by `matchAny(path)` / `matchAll(path)`. Unlike ordinary resolution the
//! traversal descends through arrays at every level, terminal arrays included,
//! and flattens every reached value into one list. Any missing branch fails
//! the whole collection.

use serde_json::Value as JsonValue;

use super::segments::PathSegments;
use crate::error::{QueryError, QueryResult};

pub struct MultiColumnCollector;

impl MultiColumnCollector {
    /// Collects every terminal node reached by `path`, in document order
    pub fn collect<'a>(node: &'a JsonValue, path: &str) -> QueryResult<Vec<&'a JsonValue>> {
        let path = PathSegments::new(path);
        let segments = path.segments();
        let mut found = Vec::new();
        Self::descend(node, &segments, path.complete(), &mut found)?;
        tracing::trace!(
            target: "sqljson::path",
            path = %path,
            items = found.len(),
            "Collected multi-value column"
        );
        Ok(found)
    }

    fn descend<'a>(
        node: &'a JsonValue,
        segments: &[&str],
        complete: &str,
        found: &mut Vec<&'a JsonValue>,
    ) -> QueryResult<()> {
        if let JsonValue::Array(items) = node {
            for item in items {
                Self::descend(item, segments, complete, found)?;
            }
            return Ok(());
        }

        match segments.split_first() {
            None => {
                found.push(node);
                Ok(())
            }
            Some((head, rest)) => {
                let next = node
                    .as_object()
                    .and_then(|fields| fields.get(*head))
                    .ok_or_else(|| QueryError::element_not_found_within(*head, complete))?;
                Self::descend(next, rest, complete, found)
            }
        }
    }
}
