use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::FolioError;

/// Tunable constants of the simplification pipeline.
///
/// Every field has an independent default, so a params file may override
/// just the knobs it cares about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    /// Fraction of the page width within which two x-centers share a column.
    #[serde(default = "default_column_width_ratio")]
    pub column_width_ratio: f64,
    /// Lower bound for the column threshold, in page units.
    #[serde(default = "default_min_column_gap")]
    pub min_column_gap: i64,
    /// Rank given to words with no reading-order sub-category; sorts them
    /// after every ranked word.
    #[serde(default = "default_fallback_reading_order")]
    pub fallback_reading_order: i64,
    /// Edge length assumed for both axes when a record carries no page box.
    #[serde(default = "default_page_edge")]
    pub default_page_edge: f64,
}

fn default_column_width_ratio() -> f64 {
    0.08
}

fn default_min_column_gap() -> i64 {
    60
}

fn default_fallback_reading_order() -> i64 {
    999_999
}

fn default_page_edge() -> f64 {
    1000.0
}

impl Default for LayoutParams {
    fn default() -> Self {
        LayoutParams {
            column_width_ratio: default_column_width_ratio(),
            min_column_gap: default_min_column_gap(),
            fallback_reading_order: default_fallback_reading_order(),
            default_page_edge: default_page_edge(),
        }
    }
}

impl LayoutParams {
    /// Column acceptance threshold for a page of the given width.
    pub fn column_threshold(&self, page_width: i64) -> i64 {
        ((self.column_width_ratio * page_width as f64) as i64).max(self.min_column_gap)
    }
}

/// Load layout params from a JSON file.
pub fn load_params(path: &Path) -> Result<LayoutParams, FolioError> {
    let content = std::fs::read_to_string(path).map_err(|e| FolioError::ParamsLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_params(&content, path)
}

/// Parse layout params from a JSON string.
pub fn parse_params(json: &str, source: &Path) -> Result<LayoutParams, FolioError> {
    let params: LayoutParams = serde_json::from_str(json).map_err(|e| FolioError::ParamsLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_params(&params)?;
    Ok(params)
}

/// Parse layout params from a JSON string (no file path context).
pub fn parse_params_str(json: &str) -> Result<LayoutParams, FolioError> {
    let params: LayoutParams = serde_json::from_str(json).map_err(FolioError::Json)?;
    validate_params(&params)?;
    Ok(params)
}

/// Validate that layout params are usable.
pub fn validate_params(params: &LayoutParams) -> Result<(), FolioError> {
    if !(params.column_width_ratio > 0.0 && params.column_width_ratio <= 1.0) {
        return Err(FolioError::ParamsInvalid(format!(
            "column_width_ratio must be within (0, 1], got {}",
            params.column_width_ratio
        )));
    }

    if params.min_column_gap < 0 {
        return Err(FolioError::ParamsInvalid(format!(
            "min_column_gap must not be negative, got {}",
            params.min_column_gap
        )));
    }

    if params.fallback_reading_order < 0 {
        return Err(FolioError::ParamsInvalid(format!(
            "fallback_reading_order must not be negative, got {}",
            params.fallback_reading_order
        )));
    }

    if params.default_page_edge < 1.0 {
        return Err(FolioError::ParamsInvalid(format!(
            "default_page_edge must be at least 1, got {}",
            params.default_page_edge
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = LayoutParams::default();
        assert_eq!(params.column_width_ratio, 0.08);
        assert_eq!(params.min_column_gap, 60);
        assert_eq!(params.fallback_reading_order, 999_999);
        assert_eq!(params.default_page_edge, 1000.0);
    }

    #[test]
    fn test_partial_override_keeps_remaining_defaults() {
        let params = parse_params_str(r#"{ "min_column_gap": 25 }"#).unwrap();
        assert_eq!(params.min_column_gap, 25);
        assert_eq!(params.column_width_ratio, 0.08);
        assert_eq!(params.fallback_reading_order, 999_999);
    }

    #[test]
    fn test_column_threshold_scales_with_page_width() {
        let params = LayoutParams::default();
        assert_eq!(params.column_threshold(1000), 80);
        assert_eq!(params.column_threshold(2000), 160);
    }

    #[test]
    fn test_column_threshold_floor_on_narrow_pages() {
        let params = LayoutParams::default();
        assert_eq!(params.column_threshold(100), 60);
        assert_eq!(params.column_threshold(1), 60);
    }

    #[test]
    fn test_zero_ratio_rejected() {
        assert!(parse_params_str(r#"{ "column_width_ratio": 0.0 }"#).is_err());
    }

    #[test]
    fn test_ratio_above_one_rejected() {
        assert!(parse_params_str(r#"{ "column_width_ratio": 1.5 }"#).is_err());
    }

    #[test]
    fn test_negative_gap_rejected() {
        assert!(parse_params_str(r#"{ "min_column_gap": -1 }"#).is_err());
    }

    #[test]
    fn test_tiny_page_edge_rejected() {
        assert!(parse_params_str(r#"{ "default_page_edge": 0.5 }"#).is_err());
    }
}
