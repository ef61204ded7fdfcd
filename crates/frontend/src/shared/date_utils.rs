//! Utilities for date formatting
//!
//! The API sends timestamps as RFC 3339 or as plain SQL datetimes; the console
//! shows them as MM/DD/YYYY.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Format an API timestamp as MM/DD/YYYY
/// Example: "2025-09-23T08:15:00Z" -> "09/23/2025"
pub fn format_us_date(raw: &str) -> Option<String> {
    parse_date(raw).map(|d| d.format("%m/%d/%Y").to_string())
}

/// Same as [`format_us_date`] with "N/A" for missing or unreadable values
pub fn format_us_date_or_na(raw: Option<&str>) -> String {
    raw.and_then(format_us_date)
        .unwrap_or_else(|| "N/A".to_string())
}

/// Current local date, start of the default request window
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
