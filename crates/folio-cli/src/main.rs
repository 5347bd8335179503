//! Folio CLI - validate form fields, upload portfolios, fetch page data.
//!
//! # Usage
//!
//! ```bash
//! # Check a single field against the form rules
//! folio validate date 20240229
//!
//! # Upload a video and submit its metadata
//! folio upload reel.mp4 --title "Showreel" --date 20240229 \
//!     --about "Frontend work" --email dev@example.com --code 123456 --range FE
//!
//! # Validate and key the upload without sending anything
//! folio upload reel.mp4 ... --dry-run
//!
//! # Load the portfolio page data, optionally writing a snapshot
//! folio fetch --json --out page.json
//! ```

mod config;
mod fetch;
mod output;
mod upload;

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio_core::validate::validate;
use folio_core::{Field, Range};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Folio portfolio CLI.
///
/// Uses the same validation rules, bucket keys and backend endpoints as the
/// Folio app.
#[derive(Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Check one value against a field's rule (title, date, about, email, code)
    Validate {
        field: Field,
        value: String,
    },

    /// Upload a video to the bucket and submit the portfolio form
    Upload {
        /// Video file (mp4, avi, webm, wmv, mov)
        file: PathBuf,

        #[arg(long)]
        title: String,

        /// Portfolio date as YYYYMMDD
        #[arg(long)]
        date: String,

        #[arg(long)]
        about: String,

        #[arg(long)]
        email: String,

        /// Verification code received by email
        #[arg(long)]
        code: String,

        /// Portfolio range
        #[arg(long, default_value = "FE")]
        range: Range,

        /// Validate and derive the bucket key without uploading or submitting
        #[arg(long)]
        dry_run: bool,
    },

    /// Load the portfolio page data from the backend
    Fetch {
        /// Also write the page data to this file as JSON
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Validate { field, value } => {
            let valid = validate(field, &value);
            let output = if cli.json {
                output::format_validation_json(field, &value, valid)
            } else {
                output::format_validation_human(field, valid)
            };
            println!("{}", output);

            if !valid {
                std::process::exit(1);
            }
        }
        Command::Upload {
            file,
            title,
            date,
            about,
            email,
            code,
            range,
            dry_run,
        } => {
            let args = upload::UploadArgs {
                range,
                title,
                date,
                about,
                email,
                code,
            };
            let outcome = upload::execute_upload(&file, &args, dry_run, !cli.json).await?;

            let output = if cli.json {
                output::format_upload_json(&outcome.receipt, &outcome.submission, dry_run)
            } else {
                output::format_upload_human(&outcome.receipt, &outcome.submission, dry_run)
            };
            println!("{}", output);
        }
        Command::Fetch { out } => {
            let page = fetch::execute_fetch(out.as_deref()).await?;

            let output = if cli.json {
                output::format_page_json(&page)
            } else {
                let video_url = config::settings().ok().map(|settings| {
                    page.content
                        .video_url(&settings.storage.bucket, &settings.storage.region)
                });
                output::format_page_human(&page, video_url.as_deref())
            };
            println!("{}", output);
        }
    }

    Ok(())
}
