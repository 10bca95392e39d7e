use folio_core::model::Page;
use folio_core::simplify::SimplifyStats;

const PREVIEW_CHARS: usize = 60;

pub fn format_page(page: &Page, stats: &SimplifyStats) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Simplified annotations: {} -> {}\n",
        stats.annotations_before, stats.annotations_after
    ));
    out.push_str(&format!(
        "  {} parent(s) merged, {} annotation(s) removed, {} column(s)\n",
        stats.parents_merged, stats.children_removed, stats.columns
    ));

    if page.annotations.is_empty() {
        return out;
    }

    out.push_str("\nReading order:\n");
    let max_category = page
        .annotations
        .iter()
        .map(|a| a.category_name.len())
        .max()
        .unwrap_or(8);

    for (i, ann) in page.annotations.iter().enumerate() {
        let text = ann.text.as_deref().map(preview).unwrap_or_default();
        out.push_str(&format!(
            "  {:>3}. {:<width$}  {}\n",
            i + 1,
            ann.category_name,
            text,
            width = max_category
        ));
    }

    out
}

fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{cut}...")
}
