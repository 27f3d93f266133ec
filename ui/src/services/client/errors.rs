use thiserror::Error;

/// Client-side authentication errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// The request never completed (DNS failure, refused connection, offline)
    #[error("Network error: {message}")]
    Network { message: String },

    /// A body could not be serialized or deserialized
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// The endpoint answered with something other than the documented shape
    #[error("Invalid response format: expected {expected}, got {got}")]
    InvalidResponse { expected: String, got: String },
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
