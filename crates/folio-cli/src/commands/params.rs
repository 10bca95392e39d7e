use std::path::Path;

use folio_core::error::FolioError;
use folio_core::params::{load_params, LayoutParams};

pub fn show() -> Result<(), FolioError> {
    let defaults = LayoutParams::default();
    println!("Default layout params:\n");
    println!("{}", serde_json::to_string_pretty(&defaults)?);
    println!();
    println!("  column_width_ratio      Fraction of the page width within which two");
    println!("                          x-centers share a column.");
    println!("  min_column_gap          Lower bound for the column threshold, in page");
    println!("                          units. Keeps narrow pages from over-splitting.");
    println!("  fallback_reading_order  Rank for words without a reading_order");
    println!("                          sub-category; sorts them after ranked words.");
    println!("  default_page_edge       Page box edge assumed when a record carries");
    println!("                          no _bbox.");
    println!();
    println!("Pass a JSON file overriding any subset of these via --params.");
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), FolioError> {
    let params = load_params(file)?;

    println!("Layout params file is valid.");
    println!("  column_width_ratio: {}", params.column_width_ratio);
    println!("  min_column_gap: {}", params.min_column_gap);
    println!("  fallback_reading_order: {}", params.fallback_reading_order);
    println!("  default_page_edge: {}", params.default_page_edge);

    Ok(())
}
