use thiserror::Error;

use crate::storage::StorageError;

pub type HistoryResult<T> = Result<T, HistoryError>;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Failed to encode history: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Malformed history in slot {key}: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
