use thiserror::Error;

/// API client errors
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    CoreError(#[from] shiftbook_core::error::CoreError),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Unexpected response body: {0}")]
    Decode(String),
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
