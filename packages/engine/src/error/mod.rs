//! Query error handling module
//!
//! Error types for query evaluation and for reading a materialized result set,
//! plus constructor helpers that format the offending values into messages.

mod constructors;
mod types;

pub use types::{AccessError, QueryError, QueryResult};
