//! Duffel client error types.

/// Errors from the Duffel HTTP client and its offline stand-in.
#[derive(Debug, thiserror::Error)]
pub enum DuffelError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the JSON we expected
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned a non-success status
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    /// No credential configured
    #[error("not configured: {0}")]
    NotConfigured(String),

    /// Mock offer files could not be loaded
    #[error("fixture error: {0}")]
    Fixture(String),
}

fn body_suffix(body: &Option<String>) -> String {
    body.as_deref()
        .map(|b| format!(" (body: {b})"))
        .unwrap_or_default()
}
