/// Errors from the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize record: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Keys map to file names, so they are restricted to a safe alphabet.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}
