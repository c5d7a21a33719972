//! Pure display formatting for measurements and timestamps.
//!
//! These functions never fail: numeric oddities (NaN included) and
//! unparseable timestamps are rendered visibly instead of being rejected.

use chrono::{NaiveDate, NaiveDateTime};

use crate::model::UnitMode;

/// Round to the nearest whole degree and append the unit suffix.
pub fn temperature(value: f64, unit: UnitMode) -> String {
    format!("{}{}", value.round(), unit.temperature_suffix())
}

/// Round to the nearest whole speed and append the unit suffix.
pub fn wind_speed(value: f64, unit: UnitMode) -> String {
    format!("{} {}", value.round(), unit.wind_suffix())
}

/// Abbreviated weekday for a date-only string, e.g. "2026-03-02" -> "Mon".
pub fn day_label(iso_date: &str) -> String {
    NaiveDate::parse_from_str(iso_date, "%Y-%m-%d")
        .map(|date| date.format("%a").to_string())
        .unwrap_or_else(|_| iso_date.to_string())
}

/// "HH:MM" label for a full timestamp.
pub fn hour_label(iso_datetime: &str) -> String {
    parse_timestamp(iso_datetime)
        .map(|time| time.format("%H:%M").to_string())
        .unwrap_or_else(|| iso_datetime.to_string())
}

/// Date-and-time label for the "Updated:" line.
pub fn timestamp_label(iso_datetime: &str) -> String {
    parse_timestamp(iso_datetime)
        .map(|time| time.format("%a %e %b %Y, %H:%M").to_string())
        .unwrap_or_else(|| iso_datetime.to_string())
}

/// Forecast timestamps arrive in the location's local time at minute
/// resolution, occasionally with seconds.
pub(crate) fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}
