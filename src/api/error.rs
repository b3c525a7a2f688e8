//! Typed errors for the inventory service client.
//!
//! The view surfaces only the display string of whatever failed, so
//! every variant's `Display` is written to stand alone in the error
//! banner. Server error bodies are mined for their human-readable
//! message before falling back to the HTTP status line.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors from the inventory service client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Could not reach the service at all.
    #[error("Connection failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// The request did not complete within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The service answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The response body was not the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build an error from a non-success response.
    ///
    /// Accepts `{"error": "..."}` and `{"message": "..."}` bodies;
    /// anything else falls back to the status line.
    pub(crate) fn from_status(status: StatusCode, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                ["error", "message"]
                    .iter()
                    .find_map(|key| value.get(key).and_then(|v| v.as_str()).map(String::from))
            })
            .unwrap_or_else(|| format!("HTTP {}", status));

        ApiError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Connection { source: err }
        }
    }
}
