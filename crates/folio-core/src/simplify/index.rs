use std::collections::HashMap;

use crate::model::Annotation;

/// Position index over a page's annotations: id -> slot in the collection.
/// Duplicate ids keep the last occurrence.
pub fn build_index(annotations: &[Annotation]) -> HashMap<&str, usize> {
    let mut index = HashMap::with_capacity(annotations.len());
    for (slot, ann) in annotations.iter().enumerate() {
        index.insert(ann.id.as_str(), slot);
    }
    index
}
