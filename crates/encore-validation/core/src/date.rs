//! Date validation functions

use chrono::{DateTime, NaiveDate};

pub const DATE_MESSAGE: &str = "Please enter a valid date";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a calendar date as produced by `<input type="date">` (`YYYY-MM-DD`)
/// or a full RFC 3339 timestamp, keeping only the date part.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

/// Date rule: value must parse, then fall within the optional inclusive bounds.
///
/// A bound that does not parse as a date is ignored.
pub fn validate_date(value: &str, min: Option<&str>, max: Option<&str>) -> Result<(), String> {
    if value.is_empty() {
        return Ok(());
    }

    let date = parse_date(value).ok_or_else(|| DATE_MESSAGE.to_string())?;

    if let Some(min) = min {
        if let Some(bound) = parse_date(min) {
            if date < bound {
                return Err(format!("Date must be on or after {}", min));
            }
        }
    }

    if let Some(max) = max {
        if let Some(bound) = parse_date(max) {
            if date > bound {
                return Err(format!("Date must be on or before {}", max));
            }
        }
    }

    Ok(())
}
