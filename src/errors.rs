use std::result::Result as StdResult;

use thiserror::Error;

use crate::domain::CategoryId;

/// Unified error type for ledger, storage, and currency failures.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Category already exists: {name} ({kind})")]
    DuplicateCategory { name: String, kind: String },
    #[error("Category {0} is in use by existing transactions")]
    CategoryInUse(CategoryId),
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
    #[error("Persistence error: {0}")]
    Storage(String),
}

pub type Result<T> = StdResult<T, TrackerError>;

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}
