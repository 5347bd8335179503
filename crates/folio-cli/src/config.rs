//! Settings and input-file resolution for the CLI.
//!
//! Settings come from the process environment:
//! - `FOLIO_BASE_URL`: backend base URL
//! - `FOLIO_BUCKET_NAME`, `FOLIO_REGION`: upload bucket
//! - `FOLIO_ACCESS_KEY`, `FOLIO_SECRET_KEY`: bucket credentials

use anyhow::{anyhow, Context, Result};
use folio_core::settings::{ApiSettings, Settings};
use folio_core::upload::content_type_for_extension;
use folio_core::UploadTarget;
use std::path::Path;

/// Backend settings only (enough for `fetch`).
pub fn api_settings() -> Result<ApiSettings> {
    ApiSettings::from_env().context("Backend is not configured (set FOLIO_BASE_URL)")
}

/// Backend and bucket settings (needed for `upload`).
pub fn settings() -> Result<Settings> {
    Settings::from_env().context(
        "Upload is not configured (set FOLIO_BASE_URL, FOLIO_BUCKET_NAME, FOLIO_REGION, \
         FOLIO_ACCESS_KEY and FOLIO_SECRET_KEY)",
    )
}

/// MIME type for a video file, taken from its extension.
pub fn content_type_for_path(path: &Path) -> Result<&'static str> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| anyhow!("File has no extension: {}", path.display()))?;

    content_type_for_extension(extension).ok_or_else(|| {
        anyhow!(
            "Unsupported video type .{} (accepted: mp4, avi, webm, wmv, mov)",
            extension
        )
    })
}

/// Reads a video file into an upload target keyed by its file name.
pub async fn read_video(path: &Path) -> Result<UploadTarget> {
    let content_type = content_type_for_path(path)?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("Invalid file name: {}", path.display()))?;

    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read video file: {}", path.display()))?;

    UploadTarget::from_file(file_name, content_type, bytes)
        .with_context(|| format!("Cannot upload {}", path.display()))
}
