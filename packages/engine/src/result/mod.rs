//! Result assembly and cursor access

mod builder;
mod row;
mod set;

pub use builder::ResultSetBuilder;
pub use row::ResultRow;
pub use set::ResultSet;
