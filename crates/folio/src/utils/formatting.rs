//! Formatting utilities for human-readable output.

use chrono::{DateTime, Utc};

/// Format a byte count with a binary unit (`"12.4 MB"`).
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

/// Format duration in seconds to human-readable string.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_duration(30), "Just now");
/// assert_eq!(format_duration(120), "2 mins ago");
/// assert_eq!(format_duration(7200), "2 hours ago");
/// ```
pub fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        "Just now".to_string()
    } else if seconds < 3600 {
        let mins = seconds / 60;
        format!("{} min{} ago", mins, if mins == 1 { "" } else { "s" })
    } else if seconds < 86400 {
        let hours = seconds / 3600;
        format!("{} hour{} ago", hours, if hours == 1 { "" } else { "s" })
    } else {
        let days = seconds / 86400;
        format!("{} day{} ago", days, if days == 1 { "" } else { "s" })
    }
}

/// Relative upload time for a backend `createdDate` (RFC 3339).
///
/// Returns `None` when the timestamp does not parse; timestamps in the
/// future read as "Just now".
pub fn format_uploaded(created_date: &str, now: DateTime<Utc>) -> Option<String> {
    let created = DateTime::parse_from_rfc3339(created_date).ok()?;
    let elapsed = now
        .signed_duration_since(created.with_timezone(&Utc))
        .num_seconds()
        .max(0) as u64;
    Some(format_duration(elapsed))
}
