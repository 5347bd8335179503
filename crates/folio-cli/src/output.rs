//! Output formatting for command results.
//!
//! Supports both human-readable terminal output and JSON for scripting.

use folio_core::config::{CODE_LENGTH, DATE_FORMAT, MIN_TEXT_EXCLUSIVE};
use folio_core::{Field, PortfolioPage, PortfolioSubmission, UploadReceipt};
use serde::Serialize;

/// JSON output for `folio validate`
#[derive(Serialize)]
pub struct ValidationOutput<'a> {
    pub field: &'a str,
    pub value: &'a str,
    pub valid: bool,
    pub rule: String,
}

/// JSON output for `folio upload`
#[derive(Serialize)]
pub struct UploadOutput<'a> {
    pub dry_run: bool,
    pub key: &'a str,
    pub size: u64,
    pub submission: &'a PortfolioSubmission,
}

/// Human description of the rule a field is checked against.
pub fn rule_for(field: Field) -> String {
    match field {
        Field::Title | Field::About => {
            format!("more than {MIN_TEXT_EXCLUSIVE} characters")
        }
        Field::Date => format!("a real calendar date as {DATE_FORMAT} (YYYYMMDD)"),
        Field::Email => "an email address".to_string(),
        Field::Code => format!("exactly {CODE_LENGTH} characters"),
    }
}

pub fn format_validation_human(field: Field, valid: bool) -> String {
    if valid {
        format!("{} ok", field.label())
    } else {
        format!("{} invalid: expected {}", field.label(), rule_for(field))
    }
}

pub fn format_validation_json(field: Field, value: &str, valid: bool) -> String {
    let output = ValidationOutput {
        field: field.name(),
        value,
        valid,
        rule: rule_for(field),
    };
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

/// Lists every failing field with its rule, one per line.
pub fn format_invalid_fields(fields: &[Field]) -> String {
    let mut output = format!(
        "{} field{} failed validation:\n",
        fields.len(),
        if fields.len() == 1 { "" } else { "s" }
    );
    for field in fields {
        output.push_str(&format!("  {} expected {}\n", field.label(), rule_for(*field)));
    }
    output.trim_end().to_string()
}

pub fn format_upload_human(
    receipt: &UploadReceipt,
    submission: &PortfolioSubmission,
    dry_run: bool,
) -> String {
    let mut output = String::new();
    if dry_run {
        output.push_str("Dry run: nothing was uploaded or submitted.\n");
    } else {
        output.push_str("Portfolio uploaded and submitted.\n");
    }
    output.push_str(&format!("   Key:   {}\n", receipt.key));
    output.push_str(&format!("   Size:  {} bytes\n", receipt.size));
    output.push_str(&format!(
        "   Title: {} [{}]\n",
        submission.title, submission.range
    ));
    output.push_str(&format!("   Date:  {}\n", submission.date));
    output.push_str(&format!("   Email: {}", submission.email));
    output
}

pub fn format_upload_json(
    receipt: &UploadReceipt,
    submission: &PortfolioSubmission,
    dry_run: bool,
) -> String {
    let output = UploadOutput {
        dry_run,
        key: &receipt.key,
        size: receipt.size,
        submission,
    };
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

/// Formats page data for the terminal.
pub fn format_page_human(page: &PortfolioPage, video_url: Option<&str>) -> String {
    let content = &page.content;
    let mut output = format!("{} [{}]\n", content.title, content.range);
    output.push_str(&format!("   Date:  {}\n", content.display_date()));
    output.push_str(&format!("   About: {}\n", content.about));
    output.push_str(&format!("   Email: {}\n", content.email));
    output.push_str(&format!("   Video: {}", content.video_key()));
    if let Some(url) = video_url {
        output.push_str(&format!("\n          {url}"));
    }
    output
}

pub fn format_page_json(page: &PortfolioPage) -> String {
    page.to_json()
}
