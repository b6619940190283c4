use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
