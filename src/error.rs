use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("File not found at: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
