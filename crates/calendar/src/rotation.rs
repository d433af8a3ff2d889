//! Rotation-day assignment.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::CalendarError;

/// An instructional day and its position in the rotation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchoolDay {
    date: NaiveDate,
    rotation_index: usize,
}

impl SchoolDay {
    /// Returns the calendar date.
    pub fn date(self) -> NaiveDate {
        self.date
    }

    /// Returns the cycle position, in `0..cycle_len`.
    pub fn rotation_index(self) -> usize {
        self.rotation_index
    }

    /// Returns the calendar weekday of this day.
    pub fn weekday(self) -> Weekday {
        self.date.weekday()
    }
}

/// Assigns every instructional day a position in a `cycle_len`-day rotation.
///
/// The index is the day's position in `days` modulo `cycle_len`. Excluded
/// dates never appear in `days`, so they do not consume a rotation slot and
/// the cycle carries on across weekends and holidays without resetting.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidCycleLength`] if `cycle_len` is zero.
pub fn assign_rotation(
    days: &[NaiveDate],
    cycle_len: usize,
) -> Result<Vec<SchoolDay>, CalendarError> {
    if cycle_len == 0 {
        return Err(CalendarError::InvalidCycleLength { length: cycle_len });
    }
    Ok(days
        .iter()
        .enumerate()
        .map(|(i, &date)| SchoolDay {
            date,
            rotation_index: i % cycle_len,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn zero_cycle() {
        assert_eq!(
            assign_rotation(&[ymd(2024, 9, 2)], 0).unwrap_err(),
            CalendarError::InvalidCycleLength { length: 0 }
        );
    }

    #[test]
    fn zero_cycle_rejected_even_without_days() {
        assert!(assign_rotation(&[], 0).is_err());
    }

    #[test]
    fn empty_days() {
        assert!(assign_rotation(&[], 8).unwrap().is_empty());
    }

    #[test]
    fn cycle_of_one() {
        let days = [ymd(2024, 9, 2), ymd(2024, 9, 3), ymd(2024, 9, 4)];
        let school = assign_rotation(&days, 1).unwrap();
        assert!(school.iter().all(|d| d.rotation_index() == 0));
    }

    #[test]
    fn positional_modulo() {
        let days: Vec<_> = (2..=6).map(|d| ymd(2024, 9, d)).collect();
        let school = assign_rotation(&days, 2).unwrap();
        let indices: Vec<_> = school.iter().map(|d| d.rotation_index()).collect();
        assert_eq!(indices, vec![0, 1, 0, 1, 0]);
        assert_eq!(school[0].date(), ymd(2024, 9, 2));
        assert_eq!(school[0].weekday(), Weekday::Mon);
    }
}
