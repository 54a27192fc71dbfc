//! Store Errors

use thiserror::Error;

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures surfaced by the store.
///
/// Unknown ids in `edit`/`delete` are not errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage backend refused a read or write (unavailable, quota exceeded).
    #[error("storage error: {0}")]
    Storage(String),

    #[error("failed to serialize todos: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The persisted blob under `key` is not a todo collection.
    #[error("stored value under '{key}' is not a todo list: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
