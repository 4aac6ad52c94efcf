use thiserror::Error;

use crate::repository::error::DataLayerError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Mapping error: `{0}`")]
    MappingError(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] DataLayerError),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid page size `{0}`, must be between 1 and {max}", max = crate::service::item::validator::MAX_PAGE_SIZE)]
    InvalidPageSize(u32),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    BR_0000,
    BR_0054,
    BR_0084,
    BR_0093,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::BR_0000 => "Unmapped error code",
            ErrorCode::BR_0054 => "Database error",
            ErrorCode::BR_0084 => "General input validation error",
            ErrorCode::BR_0093 => "Invalid page size",
        }
    }
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::Validation(error) => error.error_code(),
            ServiceError::Repository(error) => error.error_code(),
            ServiceError::MappingError(_) => ErrorCode::BR_0000,
        }
    }
}

impl ValidationError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ValidationError::InvalidPageSize(_) => ErrorCode::BR_0093,
        }
    }
}
