//! # SqlJson Engine
//!
//! Evaluates already-parsed SQL-style queries against an in-memory JSON
//! document and materializes a typed, cursor-addressable result set.
//!
//! ## Features
//!
//! - **Typed value model** with numeric promotion and ISO date/time inference
//! - **Array-aware path resolution** that flattens through JSON arrays
//! - **WHERE interpreter** covering AND/OR/NOT, comparisons, BETWEEN, IN,
//!   arithmetic and `matchAny`/`matchAll` multi-value columns
//! - **SELECT projection** of paths, aliases, `*` and the whole-row `.` selector
//! - **DISTINCT** by structural row equality
//!
//! ## Usage
//!
//! ```
//! use serde_json::json;
//! use sqljson_engine::prelude::*;
//!
//! let document = json!([{"name": "Daniel", "age": 38}, {"name": "John", "age": 41}]);
//! let query = QueryClause::builder(".")
//!     .filter(FilterExpression::equals(
//!         FilterExpression::column("name"),
//!         FilterExpression::literal("Daniel"),
//!     ))
//!     .select_all()
//!     .build();
//!
//! let mut result = JsonProcessor::new(&document, &query, QueryConfig::default())
//!     .process()
//!     .expect("query evaluates");
//! assert_eq!(result.len(), 1);
//! assert!(result.advance());
//! assert_eq!(result.get_i64_by_name("age").expect("readable"), Some(38));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod ast;
pub mod config;
pub mod error;
pub mod filter;
pub mod path;
pub mod prelude;
pub mod processor;
pub mod result;
pub mod select;
pub mod value;

pub use ast::{FilterExpression, ProjectionItem, QueryClause};
pub use config::QueryConfig;
pub use error::{AccessError, QueryError, QueryResult};
pub use processor::JsonProcessor;
pub use result::{ResultRow, ResultSet, ResultSetBuilder};
pub use value::{MatchMode, MultiValueColumn, Value, ValueType};
