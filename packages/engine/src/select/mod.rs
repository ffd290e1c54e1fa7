//! SELECT clause projection

mod projector;
mod row;

pub use projector::SelectProjector;
pub use row::ProjectedRow;
