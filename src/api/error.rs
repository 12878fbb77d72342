//! Restaurant service-specific error types.

/// Errors that can occur during restaurant service operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Service returned an error response
    #[error("API error (status {status}): {message}")]
    Status { status: u16, message: String },

    /// Failed to deserialize service response
    #[error("Failed to deserialize API response: {0}")]
    Deserialization(#[from] serde_json::Error),
}
