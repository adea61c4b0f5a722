//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// IO error during UI operations (terminal setup, event polling, drawing)
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
