//! Places API error types.

/// Errors from the address autocomplete provider.
#[derive(Debug, thiserror::Error)]
pub enum PlacesError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-OK status
    #[error("API error {status}: {message}")]
    Api { status: String, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
