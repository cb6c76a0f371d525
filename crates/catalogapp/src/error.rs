use crate::model::{Collection, RecordId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Record not found in {collection}: {id}")]
    NotFound { collection: Collection, id: RecordId },

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Storage quota exceeded: {needed} bytes needed, quota is {quota}")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("Stored {collection} data is malformed: {reason}")]
    MalformedStoredData {
        collection: Collection,
        reason: String,
    },

    #[error("No backup found")]
    BackupNotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid rule for field '{field}': {reason}")]
    InvalidRule { field: String, reason: String },

    #[error("Unknown form: {0}")]
    UnknownForm(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl CatalogError {
    /// True for faults of the persistence medium itself (as opposed to
    /// missing records or bad input).
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            CatalogError::StorageUnavailable(_)
                | CatalogError::QuotaExceeded { .. }
                | CatalogError::Io(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
