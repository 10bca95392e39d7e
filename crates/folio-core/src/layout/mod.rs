pub mod columns;
pub mod geometry;

pub use columns::order_annotations;
pub use geometry::{to_absolute, AbsBox, PageFrame};
