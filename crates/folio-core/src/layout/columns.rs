use log::debug;

use crate::layout::geometry::{to_absolute, PageFrame};
use crate::model::Annotation;
use crate::params::LayoutParams;

/// An annotation pinned to its absolute position on the page.
struct Placed {
    ann: Annotation,
    cx: f64,
    y_top: i64,
    ulx: i64,
}

struct Column {
    center: f64,
    members: Vec<Placed>,
}

/// Sort a page's annotations into reading order: columns left to right,
/// top to bottom within each column.
///
/// Clustering is first-fit over columns in creation order with a running
/// mean center, so the outcome depends on the ascending x-center walk.
/// Returns the reordered annotations and the number of detected columns.
pub fn order_annotations(
    annotations: Vec<Annotation>,
    frame: &PageFrame,
    params: &LayoutParams,
) -> (Vec<Annotation>, usize) {
    if annotations.is_empty() {
        return (annotations, 0);
    }
    let total = annotations.len();

    let mut items: Vec<Placed> = annotations
        .into_iter()
        .map(|ann| {
            let absb = to_absolute(ann.bounding_box.as_ref(), frame);
            Placed {
                cx: absb.center_x(),
                y_top: absb.uly,
                ulx: absb.ulx,
                ann,
            }
        })
        .collect();

    // Ascending x-centers; clustering below relies on this walk order.
    items.sort_by(|a, b| a.cx.total_cmp(&b.cx));

    let threshold = params.column_threshold(frame.width()) as f64;
    let mut columns: Vec<Column> = Vec::new();
    for item in items {
        match columns
            .iter_mut()
            .find(|col| (item.cx - col.center).abs() <= threshold)
        {
            Some(col) => {
                col.members.push(item);
                col.center =
                    col.members.iter().map(|m| m.cx).sum::<f64>() / col.members.len() as f64;
            }
            None => columns.push(Column {
                center: item.cx,
                members: vec![item],
            }),
        }
    }

    columns.sort_by(|a, b| a.center.total_cmp(&b.center));
    debug!(
        "clustered {} annotations into {} columns (threshold {})",
        total,
        columns.len(),
        threshold
    );

    let column_count = columns.len();
    let mut ordered = Vec::with_capacity(total);
    for mut col in columns {
        col.members.sort_by_key(|m| (m.y_top, m.ulx));
        ordered.extend(col.members.into_iter().map(|m| m.ann));
    }

    (ordered, column_count)
}
