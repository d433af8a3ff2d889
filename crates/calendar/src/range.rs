//! Inclusive calendar date ranges.

use std::iter::FusedIterator;

use chrono::NaiveDate;

use crate::error::CalendarError;

/// An inclusive range of calendar dates, `start..=end`.
///
/// Iterating yields every date in ascending order, one day at a time. The
/// range is a plain value, so it can be walked as often as needed.
///
/// # Example
///
/// ```
/// use bellcal_calendar::DateRange;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
/// let range = DateRange::new(start, end).unwrap();
/// assert_eq!(range.n_days(), 4);
/// assert_eq!(range.iter().last(), Some(end));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates the range `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidRange`] if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CalendarError> {
        if start > end {
            return Err(CalendarError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the first date.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last date.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns the number of dates in the range (always at least 1).
    pub fn n_days(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    /// Returns `true` if `date` lies within the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns an iterator over every date in the range.
    pub fn iter(&self) -> Dates {
        Dates {
            next: Some(self.start),
            end: self.end,
        }
    }
}

impl IntoIterator for &DateRange {
    type Item = NaiveDate;
    type IntoIter = Dates;

    fn into_iter(self) -> Dates {
        self.iter()
    }
}

/// Iterator over the dates of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct Dates {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for Dates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next.filter(|d| *d <= self.end)?;
        self.next = if current < self.end {
            current.succ_opt()
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(d) if d <= self.end => (self.end - d).num_days() as usize + 1,
            _ => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Dates {}

impl FusedIterator for Dates {}
