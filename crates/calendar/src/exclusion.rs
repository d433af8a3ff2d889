//! Non-instructional dates.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{CalendarError, LineError};
use crate::format::{parse_date_with, validate_format};

/// A set of dates on which no classes are held (holidays, breaks, in-service
/// days).
///
/// Membership is by calendar date only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    dates: BTreeSet<NaiveDate>,
}

impl ExclusionSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a newline-delimited list of dates, one per line.
    ///
    /// Blank and whitespace-only lines are skipped. Every other line that does
    /// not parse under `format` is collected, and all of them are returned
    /// together in a single [`CalendarError::MalformedDates`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDateFormat`] if `format` is unusable,
    /// or [`CalendarError::MalformedDates`] if any line fails to parse.
    pub fn parse(text: &str, format: &str) -> Result<Self, CalendarError> {
        validate_format(format)?;

        let mut dates = BTreeSet::new();
        let mut errors = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let value = line.trim();
            if value.is_empty() {
                continue;
            }
            match parse_date_with(value, format) {
                Ok(date) => {
                    dates.insert(date);
                }
                Err(e) => errors.push(LineError {
                    line: idx + 1,
                    raw: line.trim_end().to_string(),
                    reason: e.to_string(),
                }),
            }
        }

        if !errors.is_empty() {
            return Err(CalendarError::MalformedDates {
                format: format.to_string(),
                errors,
            });
        }
        debug!(n_dates = dates.len(), "parsed exclusion list");
        Ok(Self { dates })
    }

    /// Adds a date, returning `true` if it was not already present.
    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }

    /// Returns `true` if `date` is excluded.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Returns the number of distinct excluded dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns `true` if nothing is excluded.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterates the excluded dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }
}

impl FromIterator<NaiveDate> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}
