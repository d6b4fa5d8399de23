//! Storage error types.

/// Errors that can occur when reading or writing saved runs.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failed to read a value from the backing store.
    #[error("failed to read '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a value to the backing store.
    #[error("failed to write '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The stored value does not parse as a history document.
    #[error("stored history under '{key}' is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize the history document.
    #[error("failed to serialize history: {0}")]
    Serialize(#[source] serde_json::Error),

    /// No run with this id is stored.
    #[error("no saved run with id '{0}'")]
    RunNotFound(String),

    /// A comparison was asked for too few or too many runs.
    #[error("can only compare {min} to {max} runs, got {count}")]
    CompareCount { count: usize, min: usize, max: usize },

    /// Key contains characters the backing store cannot represent.
    #[error("invalid store key '{0}'")]
    InvalidKey(String),
}
