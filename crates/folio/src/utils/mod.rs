//! Utility modules for common patterns.

pub mod formatting;
pub mod signal_ext;

pub use formatting::{format_bytes, format_duration, format_uploaded};
pub use signal_ext::SignalExt;
