//! Error types for the bellcal-calendar crate.

use std::fmt;

use chrono::NaiveDate;

/// One line of a line-oriented date source that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    /// 1-based line number within the source.
    pub line: usize,
    /// The offending line with trailing whitespace removed.
    pub raw: String,
    /// Why the line was rejected.
    pub reason: String,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: \"{}\" ({})", self.line, self.raw, self.reason)
    }
}

/// Error type for all fallible operations in the bellcal-calendar crate.
///
/// Covers configuration mistakes (bad ranges, weekday names, cycle lengths,
/// format strings) and parse failures in date sources.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when the start of a date range falls after its end.
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// First date of the requested range.
        start: NaiveDate,
        /// Last date of the requested range.
        end: NaiveDate,
    },

    /// Returned when a rotation cycle has no days in it.
    #[error("invalid rotation cycle length: {length} (must be >= 1)")]
    InvalidCycleLength {
        /// The rejected cycle length.
        length: usize,
    },

    /// Returned when a weekday name is not recognised.
    #[error(
        "unknown weekday: \"{name}\" (valid: Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday)"
    )]
    UnknownWeekday {
        /// The name that was supplied.
        name: String,
    },

    /// Returned when a strftime-style format string cannot be used for dates.
    #[error("invalid date format: \"{format}\"")]
    InvalidDateFormat {
        /// The rejected format string.
        format: String,
    },

    /// Returned when a single date value does not match the expected format.
    #[error("invalid date \"{value}\" (expected format {format})")]
    InvalidDate {
        /// The value that failed to parse.
        value: String,
        /// The format it was parsed against.
        format: String,
    },

    /// Returned when one or more lines of a date list fail to parse.
    ///
    /// Every failing line is collected before this error is produced.
    #[error(
        "{count} malformed date line(s) (expected format {format}): {details}",
        count = .errors.len(),
        details = join_lines(.errors)
    )]
    MalformedDates {
        /// The format lines were parsed against.
        format: String,
        /// Every line that failed, in source order.
        errors: Vec<LineError>,
    },
}

fn join_lines(errors: &[LineError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_range() {
        let err = CalendarError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2024, 9, 6).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date range: start 2024-09-06 is after end 2024-09-02"
        );
    }

    #[test]
    fn error_invalid_cycle_length() {
        let err = CalendarError::InvalidCycleLength { length: 0 };
        assert_eq!(
            err.to_string(),
            "invalid rotation cycle length: 0 (must be >= 1)"
        );
    }

    #[test]
    fn error_unknown_weekday_lists_choices() {
        let err = CalendarError::UnknownWeekday {
            name: "Funday".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"Funday\""));
        assert!(msg.contains("Monday"));
        assert!(msg.contains("Sunday"));
    }

    #[test]
    fn error_malformed_dates_joins_lines() {
        let err = CalendarError::MalformedDates {
            format: "%Y/%m/%d".to_string(),
            errors: vec![
                LineError {
                    line: 2,
                    raw: "2024-09-04".to_string(),
                    reason: "input contains invalid characters".to_string(),
                },
                LineError {
                    line: 5,
                    raw: "soon".to_string(),
                    reason: "input contains invalid characters".to_string(),
                },
            ],
        };
        assert_eq!(
            err.to_string(),
            "2 malformed date line(s) (expected format %Y/%m/%d): \
             line 2: \"2024-09-04\" (input contains invalid characters); \
             line 5: \"soon\" (input contains invalid characters)"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<CalendarError>();
    }
}
