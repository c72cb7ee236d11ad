use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserStoreError {
    /// Missing or invalid flag, or an unsupported operation.
    #[error("{0}")]
    Validation(String),

    /// Malformed JSON, either in the backing file or in `-item`.
    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl UserStoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        UserStoreError::Validation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, UserStoreError>;
