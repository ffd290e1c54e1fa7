//! Dotted path resolution over the document tree
//!
//! Objects are descended field by field. An array met on the way is resolved
//! element by element against the remaining path and the per-element results
//! are wrapped in a new array, so `items.name` over an array of items yields
//! the array of names. Elements lacking the field are skipped; the traversal
//! only fails when no element at all produced a result.

use std::borrow::Cow;

use serde_json::Value as JsonValue;

use super::segments::PathSegments;
use crate::error::{QueryError, QueryResult};

/// Path resolution utilities
pub struct PathResolver;

impl PathResolver {
    /// Resolves `path` against `node`
    ///
    /// With `allow_missing` an absent field yields a JSON `null` instead of
    /// `ElementNotFound`. Nodes reached without crossing an array are borrowed
    /// from the document; array traversal builds an owned result array.
    pub fn resolve<'a>(
        node: &'a JsonValue,
        path: &str,
        allow_missing: bool,
    ) -> QueryResult<Cow<'a, JsonValue>> {
        let path = PathSegments::new(path);
        let segments = path.segments();
        tracing::trace!(
            target: "sqljson::path",
            path = %path,
            allow_missing = allow_missing,
            "Resolving path"
        );
        Self::walk(node, &segments, path.complete(), allow_missing)
    }

    fn walk<'a>(
        node: &'a JsonValue,
        segments: &[&str],
        complete: &str,
        allow_missing: bool,
    ) -> QueryResult<Cow<'a, JsonValue>> {
        let Some((head, rest)) = segments.split_first() else {
            return Ok(Cow::Borrowed(node));
        };

        if let JsonValue::Array(items) = node {
            tracing::trace!(
                target: "sqljson::path",
                remaining = %segments.join("."),
                elements = items.len(),
                "Traversing through array elements"
            );
            let mut results = Vec::with_capacity(items.len());
            let mut first_failure = None;
            for item in items {
                let Some(next) = item.as_object().and_then(|fields| fields.get(*head)) else {
                    continue;
                };
                match Self::walk(next, rest, complete, allow_missing) {
                    Ok(found) => results.push(found.into_owned()),
                    Err(error) => {
                        first_failure.get_or_insert(error);
                    }
                }
            }

            if results.is_empty() && !allow_missing {
                return Err(first_failure.unwrap_or_else(|| {
                    QueryError::element_not_found_within(segments.join("."), complete)
                }));
            }
            return Ok(Cow::Owned(JsonValue::Array(results)));
        }

        match node.as_object().and_then(|fields| fields.get(*head)) {
            Some(next) => Self::walk(next, rest, complete, allow_missing),
            None if allow_missing => Ok(Cow::Owned(JsonValue::Null)),
            None => {
                tracing::debug!(
                    target: "sqljson::path",
                    segment = %head,
                    path = %complete,
                    "Path segment not found"
                );
                Err(QueryError::element_not_found(complete))
            }
        }
    }
}
