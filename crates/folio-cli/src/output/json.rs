use folio_core::error::FolioError;
use folio_core::model::Page;

pub fn format_page(page: &Page) -> Result<String, FolioError> {
    Ok(serde_json::to_string_pretty(page)?)
}
