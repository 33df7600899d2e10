//! Restaurant API-specific error types.

/// Errors that can occur while talking to the restaurant API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// API answered with a non-success status
    #[error("API error (status {status}): {message}")]
    Status { status: u16, message: String },

    /// Failed to serialize the request body
    #[error("Failed to serialize request body: {0}")]
    Serialization(#[from] serde_json::Error),
}
