//! Dotted path splitting

use std::fmt;

use crate::ast::DOCUMENT_ROOT;

/// A dotted path split into field names
///
/// `"."` is the document root and has no segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSegments<'p> {
    complete: &'p str,
}

impl<'p> PathSegments<'p> {
    #[inline]
    #[must_use]
    pub const fn new(complete: &'p str) -> Self {
        Self { complete }
    }

    /// The path as written, used in error messages
    #[inline]
    #[must_use]
    pub const fn complete(&self) -> &'p str {
        self.complete
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.complete == DOCUMENT_ROOT || self.complete.is_empty()
    }

    /// Field names in traversal order
    #[must_use]
    pub fn segments(&self) -> Vec<&'p str> {
        if self.is_root() {
            Vec::new()
        } else {
            self.complete.split('.').collect()
        }
    }
}

impl fmt::Display for PathSegments<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.complete)
    }
}
