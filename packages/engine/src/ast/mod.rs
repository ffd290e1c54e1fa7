//! Query Abstract Syntax Tree (AST) definitions
//!
//! The already-parsed form of a query: filter expression tree, SELECT list and
//! the clause tying them to a root path. Every type is serde-serializable so a
//! parser running elsewhere can hand the tree over as JSON.

mod expression;
mod literal;
mod projection;
mod query;

pub use expression::{ArithmeticOp, BitwiseOp, ComparisonOp, FilterExpression, LogicalOp};
pub use literal::Literal;
pub use projection::{ProjectionItem, WHOLE_ROW};
pub use query::{DOCUMENT_ROOT, QueryClause, QueryClauseBuilder};
