use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("read error for key {key}: {source}")]
    Read {
        key: String,
        source: std::io::Error,
    },

    #[error("write error for key {key}: {source}")]
    Write {
        key: String,
        source: std::io::Error,
    },

    #[error("delete error for key {key}: {source}")]
    Delete {
        key: String,
        source: std::io::Error,
    },
}
