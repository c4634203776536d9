//! Display formatting for numbers, percentages and dates.

use chrono::{DateTime, NaiveDate};

/// Format a count with `,` thousands separators, e.g. `1,234,567`.
#[must_use]
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Format a percentage with one decimal place, e.g. `42.0%`.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    format!("{value:.1}%")
}

/// Format an RFC 3339 timestamp or `YYYY-MM-DD` date as `M/D/YYYY`.
///
/// Input that is neither is returned as-is.
#[must_use]
pub fn format_date(value: &str) -> String {
    let date = DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"));

    date.map_or_else(|_| value.to_string(), |d| d.format("%-m/%-d/%Y").to_string())
}
