//! Error types for the Folio application.

use folio_core::{ApiError, ConfigError, UploadError};
use thiserror::Error;

/// Errors surfaced by the app's async tasks.
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// Settings were missing or malformed at startup
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    /// A backend request failed
    #[error("Backend request failed: {0}")]
    Api(#[from] ApiError),
    /// The video upload failed
    #[error("Upload failed: {0}")]
    Upload(#[from] UploadError),
    /// The dropped file could not be read
    #[error("Failed to read file: {0}")]
    FileRead(String),
}

impl From<AppError> for String {
    fn from(err: AppError) -> Self {
        err.to_string()
    }
}
