//! The `{success, data, error}` response envelope.
//!
//! The envelope is defined by the backend, not by this crate, so it is read
//! defensively: every field is defaulted, and anything other than
//! `success == true` is a failure. The payload under `data` is opaque at
//! this layer.

use crate::error::ApiError;
use serde::Deserialize;
use serde_json::Value;

/// Wire shape of every 2xx response from the backend.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl Envelope {
    /// Unwrap the payload, or fail with the envelope's error text.
    ///
    /// `fallback` is the operation's fixed message, used when the backend
    /// reports failure without saying why.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::OperationFailed` unless `success` is exactly `true`.
    pub fn into_data(self, fallback: &str) -> Result<Value, ApiError> {
        if self.success {
            Ok(self.data.unwrap_or(Value::Null))
        } else {
            Err(ApiError::OperationFailed(
                self.error.unwrap_or_else(|| fallback.to_string()),
            ))
        }
    }
}

/// Error body the backend nests under non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Best-effort extraction of the `detail` field from an error response body.
#[must_use]
pub fn detail_from_body(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
}
