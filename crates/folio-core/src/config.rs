//! Constants shared by the app, the CLI and the core logic.
//!
//! # Usage
//!
//! ```
//! use folio_core::config::{ACCEPTED_VIDEO_TYPES, CODE_LENGTH};
//!
//! assert!(ACCEPTED_VIDEO_TYPES.contains(&"video/mp4"));
//! assert_eq!(CODE_LENGTH, 6);
//! ```

// =============================================================================
// Form rules
// =============================================================================

/// Title and about must be strictly longer than this many characters.
pub const MIN_TEXT_EXCLUSIVE: usize = 2;

/// Verification code length (exact).
pub const CODE_LENGTH: usize = 6;

/// Input `maxlength` for the title field.
pub const TITLE_MAX_LENGTH: usize = 20;

/// Input `maxlength` for the date field (`YYYYMMDD`).
pub const DATE_MAX_LENGTH: usize = 8;

/// Input `maxlength` for the about field.
pub const ABOUT_MAX_LENGTH: usize = 30;

/// Input `maxlength` for the code field.
pub const CODE_MAX_LENGTH: usize = CODE_LENGTH;

/// Canonical `chrono` format of the date field.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Earliest year a `YYYYMMDD` date may carry. Two-digit years would be
/// read as 19xx by the browser form, so they never round-trip.
pub const DATE_MIN_YEAR: i32 = 100;

// =============================================================================
// Upload
// =============================================================================

/// MIME types accepted by the drop zone. Anything else is rejected before upload.
pub const ACCEPTED_VIDEO_TYPES: [&str; 5] = [
    "video/mp4",
    "video/avi",
    "video/webm",
    "video/wmv",
    "video/mov",
];

/// Canned ACL applied to every uploaded object.
pub const PUBLIC_READ_ACL: &str = "public-read";

/// Size of each body chunk streamed to the storage service on native targets.
///
/// One progress event is emitted per chunk.
pub const UPLOAD_CHUNK_BYTES: usize = 64 * 1024;

// =============================================================================
// Backend API
// =============================================================================

/// Portfolio page data resource.
pub const PORTFOLIO_FILE_PATH: &str = "portfolios/file";

/// Resource the completed form is posted to.
pub const PORTFOLIO_SUBMIT_PATH: &str = "portfolios";

/// Resource that mails a verification code to the entered address.
pub const VERIFICATION_CODE_PATH: &str = "portfolios/email";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_max_length_matches_rule() {
        assert_eq!(CODE_MAX_LENGTH, CODE_LENGTH);
    }

    #[test]
    fn test_accepted_types_are_video() {
        for mime in ACCEPTED_VIDEO_TYPES {
            assert!(mime.starts_with("video/"), "{mime} is not a video type");
        }
    }

    #[test]
    fn test_date_limit_fits_format() {
        assert_eq!(DATE_MAX_LENGTH, "20240229".len());
    }
}
