//! Normalization of front-matter dates to `YYYY-MM-DD`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_yaml::Value;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("unrecognized date: {0:?}")]
    Invalid(String),
    #[error("timestamp out of range: {0}")]
    OutOfRange(i64),
    #[error("date must be a string or a number")]
    Unsupported,
}

/// Normalize a front-matter `date` value to an ISO calendar date
///
/// Accepts plain dates, RFC 3339 timestamps (taken in UTC), naive
/// `YYYY-MM-DD HH:MM:SS` timestamps and Unix timestamps in milliseconds
/// (fractions truncated).
pub fn normalize_date(value: &Value) -> Result<String, DateError> {
    let date = match value {
        Value::String(s) => parse_date_str(s.trim())?,
        Value::Number(n) => {
            let ms = match n.as_i64() {
                Some(ms) => ms,
                // Fractional milliseconds are truncated; `as` saturates out-of-range values
                None => n
                    .as_f64()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
                    .ok_or_else(|| DateError::Invalid(n.to_string()))?,
            };
            DateTime::from_timestamp_millis(ms).ok_or(DateError::OutOfRange(ms))?.date_naive()
        }
        _ => return Err(DateError::Unsupported),
    };

    Ok(date.format(DATE_FORMAT).to_string())
}

fn parse_date_str(s: &str) -> Result<NaiveDate, DateError> {
    if let Ok(date) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc).date_naive());
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
        .ok_or_else(|| DateError::Invalid(s.to_string()))
}
