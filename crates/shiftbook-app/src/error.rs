use thiserror::Error;

/// Application-level errors (command layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ClientError(#[from] shiftbook_client::error::ClientError),

    #[error(transparent)]
    ServiceError(#[from] shiftbook_service::error::ServiceError),

    #[error(transparent)]
    CoreError(#[from] shiftbook_core::error::CoreError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
