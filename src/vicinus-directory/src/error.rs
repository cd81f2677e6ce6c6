//! Error types for vicinus-directory.

use thiserror::Error;

/// Directory error types.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Home directory not found.
    #[error("Could not determine home/data directory")]
    HomeDirNotFound,

    /// Directory used before `init` (or after `dispose`).
    #[error("Directory not initialized")]
    NotInitialized,
}

/// Result type for directory operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;
