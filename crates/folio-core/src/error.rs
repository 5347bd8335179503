//! Error types for folio-core.
//!
//! Uploads, backend calls and configuration loading each get their own enum
//! so callers can decide how loudly to surface them: the UI only logs upload
//! failures, while a failed page-data fetch aborts the build.

use thiserror::Error;

/// Errors that can occur while uploading a file to the bucket.
#[derive(Debug, Clone, Error)]
pub enum UploadError {
    /// The dropped file's MIME type is not in the accepted video list
    #[error("File type is not allowed: {0}")]
    UnsupportedType(String),
    /// The request never completed (connection, TLS, body stream)
    #[error("Transfer failed: {0}")]
    Transfer(String),
    /// The storage service answered with a non-success status
    #[error("Storage rejected upload with status {status}: {message}")]
    Rejected { status: u16, message: String },
    /// Storage client is not configured
    #[error("Storage misconfigured: {0}")]
    Config(String),
}

/// Errors that can occur while talking to the backend API.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Base URL or path does not form a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// The request could not be sent or the body could not be read
    #[error("Request failed: {0}")]
    Request(String),
    /// The backend answered with a non-success status
    #[error("Backend returned status {status} for {url}")]
    Status { status: u16, url: String },
    /// Response body was not the expected JSON
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Errors that can occur while loading [`Settings`](crate::settings::Settings).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Required variable is unset or empty
    #[error("Missing configuration value: {0}")]
    Missing(&'static str),
    /// Variable is set but unusable
    #[error("Invalid configuration value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl From<ConfigError> for UploadError {
    fn from(err: ConfigError) -> Self {
        UploadError::Config(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::InvalidUrl(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Request(err.to_string())
        }
    }
}

impl From<UploadError> for String {
    fn from(err: UploadError) -> String {
        err.to_string()
    }
}

impl From<ApiError> for String {
    fn from(err: ApiError) -> String {
        err.to_string()
    }
}
