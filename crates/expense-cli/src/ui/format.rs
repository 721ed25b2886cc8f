//! String formatting utilities for UI rendering.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Format a short ID from a UUID (first 8 characters).
pub fn short_id(id: &Uuid) -> String {
    id.to_string()[..8].to_string()
}

/// Amount with exactly two decimal places, no symbol. Halves round away from zero.
pub fn plain_amount(amount: Decimal) -> String {
    let mut value = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    value.rescale(2);
    value.to_string()
}

/// Amount with currency symbol and two decimal places.
pub fn format_amount(amount: Decimal, symbol: &str) -> String {
    format!("{}{}", symbol, plain_amount(amount))
}

/// Format a date for display.
///
/// Pretty: `Oct 19, 2026`. Otherwise ISO 8601.
pub fn format_date(date: &NaiveDate, pretty: bool) -> String {
    if pretty {
        date.format("%b %-d, %Y").to_string()
    } else {
        date.format("%Y-%m-%d").to_string()
    }
}

/// Sanitize a string for single-line output (replace newlines with spaces).
pub fn single_line(s: &str) -> String {
    s.replace('\n', " ").replace('\r', "")
}
