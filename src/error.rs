//! Error types for the Libris server

use thiserror::Error;

/// Coarse error classification used by handlers to pick an HTTP status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing input, rejected before any store access
    Validation,
    /// A referenced entity (author, genre) does not exist
    Resolution,
    /// The underlying store failed, or another internal fault
    Store,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    Resolution(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Classify the error for HTTP mapping at the handler boundary.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::Resolution(_) => ErrorKind::Resolution,
            AppError::Database(_) | AppError::Internal(_) => ErrorKind::Store,
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(AppError::Validation("x".into()).kind(), ErrorKind::Validation);
        assert_eq!(AppError::Resolution("x".into()).kind(), ErrorKind::Resolution);
        assert_eq!(AppError::Internal("x".into()).kind(), ErrorKind::Store);
        assert_eq!(AppError::Database(sqlx::Error::PoolClosed).kind(), ErrorKind::Store);
    }
}
