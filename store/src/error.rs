use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no record at address: {0}")]
    NotFound(String),

    #[error("address already occupied: {0}")]
    Duplicate(String),

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("database is corrupted: {0}")]
    Corruption(String),
}
