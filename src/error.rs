/// Error types for page-turner
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for page-turner operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O errors (stdin reads, file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Seed file could not be loaded
    #[error("Seed file error: {0}")]
    Seed(String),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Result type alias for page-turner operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Convert CatalogError to a user-friendly error message
impl CatalogError {
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Io(e) => {
                format!("Input/output error. Details: {}", e)
            }
            CatalogError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
            CatalogError::Seed(msg) => {
                format!("Could not load seed catalog: {}", msg)
            }
            CatalogError::Generic(msg) => msg.clone(),
        }
    }
}
