pub mod batch;
pub mod params;
pub mod simplify;

use std::path::{Path, PathBuf};

use folio_core::error::FolioError;
use folio_core::model::Page;
use folio_core::params::{load_params, LayoutParams};

pub(crate) fn resolve_params(params_file: Option<PathBuf>) -> Result<LayoutParams, FolioError> {
    match params_file {
        Some(path) => load_params(&path),
        None => Ok(LayoutParams::default()),
    }
}

pub(crate) fn read_page(path: &Path) -> Result<Page, FolioError> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| FolioError::RecordDecode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
