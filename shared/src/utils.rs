//! # Shared Utility Functions
//!
//! Display formatting helpers used by every frontend.

use chrono::{DateTime, NaiveDate};

/// Format an ISO-8601 timestamp or `YYYY-MM-DD` date for display.
///
/// Mirrors the tolerant behavior of the original screens: empty input
/// renders as `N/A`, anything unparseable as `Invalid Date`.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_date;
///
/// assert_eq!(format_date("2025-06-10T09:30:00Z"), "Jun 10, 2025");
/// assert_eq!(format_date("2025-06-10"), "Jun 10, 2025");
/// assert_eq!(format_date(""), "N/A");
/// assert_eq!(format_date("not-a-date"), "Invalid Date");
/// ```
pub fn format_date(raw: &str) -> String {
    if raw.is_empty() {
        return "N/A".to_string();
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return timestamp.format("%b %-d, %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %-d, %Y").to_string();
    }
    "Invalid Date".to_string()
}

/// Format an amount in Rwandan francs with a thousands separator.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_rwf;
///
/// assert_eq!(format_rwf(12500.0), "12,500 Rwf");
/// assert_eq!(format_rwf(950.0), "950 Rwf");
/// ```
pub fn format_rwf(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if whole < 0 {
        format!("-{grouped} Rwf")
    } else {
        format!("{grouped} Rwf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-06-10T09:30:00Z"), "Jun 10, 2025");
        assert_eq!(format_date("2025-01-02"), "Jan 2, 2025");
    }

    #[test]
    fn test_format_date_fallbacks() {
        assert_eq!(format_date(""), "N/A");
        assert_eq!(format_date("garbage"), "Invalid Date");
    }

    #[test]
    fn test_format_rwf() {
        assert_eq!(format_rwf(0.0), "0 Rwf");
        assert_eq!(format_rwf(250.0), "250 Rwf");
        assert_eq!(format_rwf(12500.0), "12,500 Rwf");
        assert_eq!(format_rwf(1234567.0), "1,234,567 Rwf");
    }
}
