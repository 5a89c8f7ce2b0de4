use astra::Response;
// errors.rs
use thiserror::Error;

/// Errors originating from the server logic (routing, missing resources,
/// response building).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Internal Server Error: {0}")]
    InternalError(String),
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::InternalError(_) => 500,
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
