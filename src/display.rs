//! Formatting helpers for rendering API data (en-US conventions).

use chrono::{NaiveDate, NaiveTime};

use crate::booking::DATE_FORMAT;
use crate::models::BookingStatus;

/// `$20`, `$25.5`: currency symbol followed by the amount without padding zeros
pub fn format_price(symbol: &str, price: f64) -> String {
    let amount = format!("{:.2}", price);
    let amount = amount.trim_end_matches('0').trim_end_matches('.');
    format!("{}{}", symbol, amount)
}

/// Leading `YYYY-MM-DD` of a date or timestamp string
fn parse_date(value: &str) -> Option<NaiveDate> {
    let head = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(head, DATE_FORMAT).ok()
}

/// `June 1, 2025`. Unparseable input is returned unchanged.
pub fn format_long_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => value.to_string(),
    }
}

/// `Sunday, June 1, 2025`
pub fn format_weekday_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => date.format("%A, %B %-d, %Y").to_string(),
        None => value.to_string(),
    }
}

/// `2:30 PM` from `14:30` or `14:30:00`
pub fn format_time_12h(value: &str) -> String {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map(|t| t.format("%-I:%M %p").to_string())
        .unwrap_or_else(|_| value.to_string())
}

/// Tailwind classes for a status pill
pub fn status_badge_class(status: &str) -> &'static str {
    match BookingStatus::parse(status) {
        BookingStatus::Confirmed => "bg-green-100 text-green-800",
        BookingStatus::Pending => "bg-yellow-100 text-yellow-800",
        BookingStatus::Cancelled => "bg-red-100 text-red-800",
        _ => "bg-gray-100 text-gray-800",
    }
}

/// Resolve an uploaded image path against the media host.
/// Absolute URLs pass through.
pub fn media_url(media_base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = media_base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
