//! Formatting and display logic
//!
//! Pure functions for turning optional API fields into table cells.

use chrono::{DateTime, NaiveDate};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Placeholder for a field the record does not have
pub const NOT_AVAILABLE: &str = "N/A";

pub fn or_na(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_AVAILABLE,
    }
}

/// Format a rupee amount with two decimals and thousands separators
///
/// # Examples
/// ```
/// use rackdesk::logic::formatting::format_currency;
///
/// assert_eq!(format_currency(0.0), "₹0.00");
/// assert_eq!(format_currency(1234567.5), "₹12,34,567.50");
/// assert_eq!(format_currency(-250.0), "-₹250.00");
/// ```
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    // Indian grouping: last three digits, then pairs
    let grouped = if whole.len() <= 3 {
        whole.to_string()
    } else {
        let (head, tail) = whole.split_at(whole.len() - 3);
        let mut parts: Vec<&str> = Vec::new();
        let mut rest = head;
        while rest.len() > 2 {
            let (left, right) = rest.split_at(rest.len() - 2);
            parts.push(right);
            rest = left;
        }
        parts.push(rest);
        parts.reverse();
        format!("{},{}", parts.join(","), tail)
    };

    format!("{}₹{}.{}", if negative { "-" } else { "" }, grouped, fraction)
}

/// Render an API timestamp as "05 Mar 2024", passing unknown formats through
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return NOT_AVAILABLE.to_string();
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d %b %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d %b %Y").to_string();
    }

    raw.to_string()
}

/// Turnaround time: bare numbers are hours
pub fn format_tat(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(v) if !v.is_empty() && v.parse::<f64>().is_ok() => format!("{}h", v),
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Truncate to a display width, marking the cut with an ellipsis
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
