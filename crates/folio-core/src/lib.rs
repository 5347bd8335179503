//! # Folio Core
//!
//! Platform-independent logic for the Folio portfolio front end.
//!
//! This crate holds everything that does not depend on a UI toolkit, so the
//! Dioxus app and the `folio` CLI share one implementation of the form rules,
//! the upload path and the backend client.
//!
//! ## Modules
//!
//! - [`validate`] - Pure per-field predicates (title, date, about, email, code)
//! - [`form`] - Form state holder and submission gate
//! - [`progress`] - Upload progress tracking (0-100 percentage)
//! - [`upload`] - Upload targets, bucket keys and the object-store trait
//! - [`s3`] - S3 `PutObject` client with Signature V4 signing
//! - [`api`] - Backend API client (`GET`/`POST` JSON)
//! - [`loader`] - Portfolio page data loader
//! - [`content`] - Portfolio content read model
//! - [`settings`] - Environment-driven configuration
//! - [`config`] - Constants (limits, accepted types, paths)
//! - [`error`] - Error types

#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod content;
pub mod error;
pub mod form;
pub mod loader;
pub mod progress;
pub mod s3;
pub mod settings;
pub mod upload;
pub mod validate;

pub use api::ApiClient;
pub use content::PortfolioContent;
pub use error::{ApiError, ConfigError, UploadError};
pub use form::{FormState, PortfolioSubmission, Range};
pub use loader::{load_portfolio_page, PortfolioPage};
pub use settings::Settings;
pub use upload::{upload_to_bucket, ObjectStore, UploadReceipt, UploadTarget};
pub use validate::Field;
