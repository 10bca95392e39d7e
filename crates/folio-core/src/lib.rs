pub mod error;
pub mod layout;
pub mod model;
pub mod params;
pub mod simplify;

use log::debug;

use layout::columns::order_annotations;
use layout::geometry::PageFrame;
use model::{Page, CHILD_RELATION};
use params::LayoutParams;
use simplify::SimplifyStats;

/// Main API entry point: simplify one page record in place.
///
/// Merges word children into their parents' text, drops the consumed word
/// annotations, and re-sorts the survivors into column-aware reading order.
/// Degenerate input never fails; unresolved references and missing fields
/// fall back to documented defaults.
pub fn simplify_page(page: &mut Page, params: &LayoutParams) -> SimplifyStats {
    let before = page.annotations.len();

    // Plan the merges against an immutable view of the page
    let plan = {
        let index = simplify::index::build_index(&page.annotations);
        simplify::words::plan_word_merges(&page.annotations, &index, params)
    };

    // Apply merged text and clear the consumed child relations
    let parents_merged = plan.merged.len();
    for (slot, text) in plan.merged {
        let ann = &mut page.annotations[slot];
        ann.text = Some(text);
        let emptied = match ann.relationships.as_mut() {
            Some(rels) => {
                rels.shift_remove(CHILD_RELATION);
                rels.is_empty()
            }
            None => false,
        };
        if emptied {
            ann.relationships = None;
        }
    }

    // Drop every annotation that was consumed as a child
    if !plan.consumed.is_empty() {
        page.annotations
            .retain(|ann| !plan.consumed.contains(&ann.id));
    }

    // Re-sort the survivors into reading order
    let frame = PageFrame::resolve(page.bbox.as_ref(), params);
    let survivors = std::mem::take(&mut page.annotations);
    let (ordered, columns) = order_annotations(survivors, &frame, params);
    page.annotations = ordered;

    let after = page.annotations.len();
    debug!(
        "simplified page: {} -> {} annotations, {} parents merged, {} columns",
        before, after, parents_merged, columns
    );

    SimplifyStats {
        annotations_before: before,
        annotations_after: after,
        parents_merged,
        children_removed: before - after,
        columns,
    }
}

/// Simplify a batch of page records in document order.
///
/// Pages are independent of each other; each is processed exactly as
/// `simplify_page` does.
pub fn simplify_pages(pages: &mut [Page], params: &LayoutParams) -> Vec<SimplifyStats> {
    pages
        .iter_mut()
        .map(|page| simplify_page(page, params))
        .collect()
}
