use thiserror::Error;

/// Why the live lawyer list could not be loaded. Never shown to visitors:
/// the directory keeps serving the fallback set instead.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid API url: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response body: {0}")]
    Decode(String),
}
