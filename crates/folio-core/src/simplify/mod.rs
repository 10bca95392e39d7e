pub mod index;
pub mod words;

use serde::{Deserialize, Serialize};

/// Counters describing one page simplification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifyStats {
    /// Annotations on the page before any processing.
    pub annotations_before: usize,
    /// Annotations left once consumed children are dropped.
    pub annotations_after: usize,
    /// Parents whose word children were merged into text.
    pub parents_merged: usize,
    /// Annotations dropped from the page.
    pub children_removed: usize,
    /// Columns detected while rebuilding reading order.
    pub columns: usize,
}
