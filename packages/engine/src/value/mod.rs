//! Value model and coercion
//!
//! The typed runtime value, its conversion from JSON nodes, numeric promotion
//! and the multi-value column produced by `matchAny`/`matchAll`.

mod conversions;
mod core;
mod multi_column;
pub mod promotion;

pub use self::core::{Value, ValueType};
pub use multi_column::{MatchMode, MultiValueColumn};
pub use promotion::{NumericPair, promoted_equals, validate_matching};
