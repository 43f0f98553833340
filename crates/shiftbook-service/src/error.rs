use thiserror::Error;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    CoreError(#[from] shiftbook_core::error::CoreError),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Export error: {0}")]
    ExportError(#[from] std::io::Error),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
