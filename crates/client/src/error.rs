//! Error types for the HerdLink client.

use thiserror::Error;

/// Main error type for client operations.
///
/// `OperationFailed` and `TransportFailed` display the bare message — it is
/// the text callers are expected to surface directly.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Configuration errors (invalid base URL)
    #[error("configuration error: {0}")]
    Config(String),

    /// The backend answered, but its envelope reports failure
    #[error("{0}")]
    OperationFailed(String),

    /// The network or HTTP layer failed (connection error, non-2xx status)
    #[error("{0}")]
    TransportFailed(String),

    /// A successful payload did not match the expected shape
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// The human-readable message carried by this error.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Config(m)
            | Self::OperationFailed(m)
            | Self::TransportFailed(m)
            | Self::Decode(m) => m,
        }
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;
