//! Upload command implementation.
//!
//! Validates the metadata first; nothing is read or sent while any field
//! fails. Then the video goes to the bucket and the form is submitted with
//! the resulting key.

use crate::config;
use anyhow::{anyhow, Context, Result};
use folio_core::s3::S3ObjectStore;
use folio_core::{upload_to_bucket, ApiClient, Field, FormState, PortfolioSubmission, Range};
use folio_core::{UploadReceipt, UploadTarget};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Metadata supplied on the command line.
#[derive(Debug)]
pub struct UploadArgs {
    pub range: Range,
    pub title: String,
    pub date: String,
    pub about: String,
    pub email: String,
    pub code: String,
}

impl UploadArgs {
    /// Form state with every field entered, as the app would hold it.
    pub fn to_form(&self) -> FormState {
        let mut form = FormState::new();
        form.select_range(self.range);
        form.set_field(Field::Title, self.title.as_str());
        form.set_field(Field::Date, self.date.as_str());
        form.set_field(Field::About, self.about.as_str());
        form.set_field(Field::Email, self.email.as_str());
        form.set_field(Field::Code, self.code.as_str());
        form
    }
}

/// Outcome of the upload command.
#[derive(Debug)]
pub struct UploadOutcome {
    pub receipt: UploadReceipt,
    pub submission: PortfolioSubmission,
}

/// Fails with the list of invalid fields when the form gate is closed.
pub fn gate(form: &FormState, file_key: &str) -> Result<PortfolioSubmission> {
    form.submission(file_key)
        .ok_or_else(|| anyhow!(crate::output::format_invalid_fields(&form.invalid_fields())))
}

/// Runs the upload. With `dry_run` set nothing leaves the machine.
pub async fn execute_upload(
    path: &Path,
    args: &UploadArgs,
    dry_run: bool,
    show_progress: bool,
) -> Result<UploadOutcome> {
    let form = args.to_form();
    // Gate on the metadata alone before touching the file
    gate(&form, "")?;

    let target = config::read_video(path).await?;
    let submission = gate(&form, &target.key)?;

    if dry_run {
        info!("Dry run: skipping upload of {}", target.key);
        return Ok(UploadOutcome {
            receipt: UploadReceipt {
                key: target.key.clone(),
                size: target.size(),
            },
            submission,
        });
    }

    let settings = config::settings()?;
    let store = S3ObjectStore::from_settings(&settings.storage);
    let api = ApiClient::from_settings(&settings.api).context("Invalid backend URL")?;

    let receipt = transfer(&store, &settings.storage.bucket, target, show_progress).await?;

    api.submit_portfolio(&submission)
        .await
        .context("Video uploaded, but the portfolio submission failed")?;
    info!("Submitted portfolio {}", submission.title);

    Ok(UploadOutcome {
        receipt,
        submission,
    })
}

async fn transfer(
    store: &S3ObjectStore,
    bucket: &str,
    target: UploadTarget,
    show_progress: bool,
) -> Result<UploadReceipt> {
    let key = target.key.clone();
    let mut last = None;

    let result = upload_to_bucket(store, bucket, target, |percentage| {
        if show_progress && last != Some(percentage) {
            last = Some(percentage);
            eprint!("\rUploading {key}... {percentage:>3}%");
            let _ = std::io::stderr().flush();
        }
    })
    .await;

    if show_progress {
        eprintln!();
    }

    result.with_context(|| format!("Upload to bucket {bucket} failed"))
}
