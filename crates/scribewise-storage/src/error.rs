use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("session not found: {id}")]
    NotFound { id: uuid::Uuid },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
