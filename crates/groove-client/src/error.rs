//! Client error types.

use thiserror::Error;

use groove_models::ValidationError;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid image URL: {0}")]
    InvalidImageUrl(#[from] ValidationError),

    #[error("request failed with status {status}: {detail}")]
    RequestFailed { status: u16, detail: String },

    #[error("job not found: {0}")]
    NotFound(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    pub fn request_failed(status: u16, detail: impl Into<String>) -> Self {
        Self::RequestFailed {
            status,
            detail: detail.into(),
        }
    }
}
