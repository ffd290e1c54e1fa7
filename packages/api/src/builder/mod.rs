//! SqlJson Builder API modules
//!
//! Fluent configuration of query evaluation, finished by handing over the
//! document as a value, text, reader or file.

pub mod core;
pub mod sources;

pub use self::core::SqlJsonBuilder;
