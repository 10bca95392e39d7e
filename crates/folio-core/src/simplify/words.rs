use std::collections::{HashMap, HashSet};

use log::warn;

use crate::model::{Annotation, READING_ORDER_KEY, WORD_CATEGORY};
use crate::params::LayoutParams;

/// Text carried by a word annotation.
///
/// The first mapping entry that carries a `value` key, in insertion order,
/// wins even when that value is empty or null; entries that are not
/// mappings are skipped. Absent any match, the annotation's own top-level
/// `value`; absent both, the empty string.
pub fn word_text(word: &Annotation) -> String {
    if let Some(subs) = &word.sub_categories {
        for entry in subs.values() {
            let sub = match entry.as_record() {
                Some(sub) => sub,
                None => continue,
            };
            if let Some(value) = &sub.value {
                // An explicit null claims the slot and yields empty text.
                return value.clone().unwrap_or_default();
            }
        }
    }
    word.value.clone().unwrap_or_default()
}

/// Reading-order rank of a word. Unranked words get the fallback rank,
/// which sorts them after every ranked word.
pub fn reading_order_rank(word: &Annotation, params: &LayoutParams) -> i64 {
    word.sub_categories
        .as_ref()
        .and_then(|subs| subs.get(READING_ORDER_KEY))
        .and_then(|entry| entry.as_record())
        .and_then(|sub| sub.category_id)
        .unwrap_or(params.fallback_reading_order)
}

/// What the aggregation pass decided, before anything is mutated.
pub(crate) struct MergePlan {
    /// Parent slot -> merged text, in page order.
    pub merged: Vec<(usize, String)>,
    /// Every id referenced by any `child` relation, resolvable or not.
    pub consumed: HashSet<String>,
}

/// Scan each parent's `child` relation and plan the word merges.
///
/// Child ids are marked consumed as soon as they are referenced; only
/// resolvable children categorized as words with non-empty text contribute
/// to the parent's merged text.
pub(crate) fn plan_word_merges(
    annotations: &[Annotation],
    index: &HashMap<&str, usize>,
    params: &LayoutParams,
) -> MergePlan {
    let mut merged = Vec::new();
    let mut consumed = HashSet::new();

    for (slot, parent) in annotations.iter().enumerate() {
        let child_ids = match parent.child_ids() {
            Some(ids) => ids,
            None => continue,
        };
        consumed.extend(child_ids.iter().cloned());

        let mut words: Vec<(i64, String)> = Vec::new();
        for child_id in child_ids {
            let child = match index.get(child_id.as_str()) {
                Some(&child_slot) => &annotations[child_slot],
                None => {
                    warn!("unresolved child id {} on parent {}", child_id, parent.id);
                    continue;
                }
            };
            if child.category_name != WORD_CATEGORY {
                continue;
            }
            let text = word_text(child);
            if text.is_empty() {
                continue;
            }
            words.push((reading_order_rank(child, params), text));
        }

        if words.is_empty() {
            continue;
        }
        // Stable: rank ties keep child-list order.
        words.sort_by_key(|(rank, _)| *rank);
        let text = words
            .into_iter()
            .map(|(_, text)| text)
            .collect::<Vec<_>>()
            .join(" ");
        merged.push((slot, text));
    }

    MergePlan { merged, consumed }
}
