use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("failed to decode page record from {path}: {reason}")]
    RecordDecode { path: PathBuf, reason: String },

    #[error("failed to load layout params from {path}: {reason}")]
    ParamsLoad { path: PathBuf, reason: String },

    #[error("invalid layout params: {0}")]
    ParamsInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
