//! # Time Utilities
//!
//! Thin chrono wrappers so the rest of the workspace agrees on one clock and
//! one wire format for timestamps.

use chrono::{DateTime, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Format time as RFC3339 string.
pub fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339()
}
