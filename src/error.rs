use thiserror::Error;

/// Main error type for kestrel operations
#[derive(Error, Debug)]
pub enum KestrelError {
    #[error("no field or segment is nil")]
    NoFields,

    #[error("No Primary Key")]
    MissingPrimaryKey,

    #[error("unknown namespace: {0}")]
    UnknownNamespace(String),

    #[error("segment {0} is not empty")]
    SegmentNotEmpty(String),

    #[error("docid {docid} out of order, expected {expected}")]
    DocIdOutOfOrder { docid: u32, expected: u32 },

    #[error("serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("meta error: {0}")]
    Meta(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type alias for kestrel operations
pub type Result<T> = std::result::Result<T, KestrelError>;

impl KestrelError {
    /// Check if this error indicates a transient failure that could be retried
    pub fn is_retriable(&self) -> bool {
        matches!(self, KestrelError::Io(_) | KestrelError::Storage(_))
    }
}
