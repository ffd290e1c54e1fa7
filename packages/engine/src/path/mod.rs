//! Path navigation
//!
//! Dotted paths address fields of the document tree. Ordinary resolution
//! flattens through arrays and can run strict or lenient; multi-value
//! collection gathers every value a path reaches across nested arrays.

mod multi_column;
mod resolver;
mod segments;

pub use multi_column::MultiColumnCollector;
pub use resolver::PathResolver;
pub use segments::PathSegments;
