//! strftime-style date parsing and formatting.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::CalendarError;

/// Default format for dates on the command line and in exclusion files.
pub const DEFAULT_DATE_FORMAT: &str = "%Y/%m/%d";

/// Checks that `format` is a usable strftime-style format string.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDateFormat`] if the string is blank or
/// contains an unrecognised specifier.
pub fn validate_format(format: &str) -> Result<(), CalendarError> {
    let broken = StrftimeItems::new(format).any(|item| matches!(item, Item::Error));
    if format.trim().is_empty() || broken {
        return Err(CalendarError::InvalidDateFormat {
            format: format.to_string(),
        });
    }
    Ok(())
}

/// Parses `value` as a date under `format`.
///
/// Formats that also describe a time of day are accepted; the time is
/// discarded so that the result always compares by calendar date.
pub fn parse_date_with(value: &str, format: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value, format)
        .or_else(|_| NaiveDateTime::parse_from_str(value, format).map(|dt| dt.date()))
}

/// Parses a single command-line date.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] naming the value and format.
pub fn parse_date(value: &str, format: &str) -> Result<NaiveDate, CalendarError> {
    parse_date_with(value.trim(), format).map_err(|_| CalendarError::InvalidDate {
        value: value.to_string(),
        format: format.to_string(),
    })
}

/// Formats `date` under `format`.
///
/// Time-of-day specifiers render as midnight.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDateFormat`] if the format cannot be
/// rendered for a naive date (for example a timezone specifier).
pub fn format_date(date: NaiveDate, format: &str) -> Result<String, CalendarError> {
    let mut out = String::new();
    write!(out, "{}", date.and_time(NaiveTime::default()).format(format)).map_err(|_| {
        CalendarError::InvalidDateFormat {
            format: format.to_string(),
        }
    })?;
    Ok(out)
}
