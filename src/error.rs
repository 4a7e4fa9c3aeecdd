//! Error types for the Libris console

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid book ID: '{input}'")]
    InvalidBookId { input: String },
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
