use chrono::{DateTime, NaiveDate};

use crate::error::{GatewayError, Result};

/// Calendar dates travel as ISO `YYYY-MM-DD`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn format_date(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format(DATE_FORMAT).to_string())
}

/// Parses a wire date for `field`.
///
/// A missing or blank value is simply absent. Full RFC 3339 timestamps are
/// accepted too and reduced to their calendar date.
pub fn parse_date(field: &'static str, value: Option<&str>) -> Result<Option<NaiveDate>> {
    let raw = match value.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };

    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Ok(Some(date));
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|timestamp| Some(timestamp.date_naive()))
        .map_err(|_| GatewayError::MalformedDate {
            field,
            value: raw.to_string(),
        })
}
