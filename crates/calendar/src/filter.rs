//! Instructional-day selection.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::exclusion::ExclusionSet;
use crate::range::DateRange;
use crate::weekday::WeekdayRange;

/// Returns the dates of `range` on which classes are held.
///
/// A date survives if its weekday is inside `week` and it is not in
/// `exclusions`. Survivors keep their ascending order.
pub fn instructional_days(
    range: &DateRange,
    week: WeekdayRange,
    exclusions: &ExclusionSet,
) -> Vec<NaiveDate> {
    let days: Vec<NaiveDate> = range
        .iter()
        .filter(|d| week.contains(d.weekday()))
        .filter(|d| !exclusions.contains(*d))
        .collect();
    debug!(
        n_calendar = range.n_days(),
        n_instructional = days.len(),
        "filtered instructional days"
    );
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekends_dropped() {
        // Mon 2024-09-02 through Sun 2024-09-15.
        let range = DateRange::new(ymd(2024, 9, 2), ymd(2024, 9, 15)).unwrap();
        let days = instructional_days(&range, WeekdayRange::default(), &ExclusionSet::new());
        assert_eq!(days.len(), 10);
        assert!(days.iter().all(|d| d.weekday() != Weekday::Sat));
        assert!(days.iter().all(|d| d.weekday() != Weekday::Sun));
    }

    #[test]
    fn exclusions_dropped() {
        let range = DateRange::new(ymd(2024, 9, 2), ymd(2024, 9, 6)).unwrap();
        let exclusions: ExclusionSet = [ymd(2024, 9, 4)].into_iter().collect();
        let days = instructional_days(&range, WeekdayRange::default(), &exclusions);
        assert_eq!(
            days,
            vec![ymd(2024, 9, 2), ymd(2024, 9, 3), ymd(2024, 9, 5), ymd(2024, 9, 6)]
        );
    }

    #[test]
    fn exclusion_outside_range_ignored() {
        let range = DateRange::new(ymd(2024, 9, 2), ymd(2024, 9, 6)).unwrap();
        let exclusions: ExclusionSet = [ymd(2025, 1, 1)].into_iter().collect();
        let days = instructional_days(&range, WeekdayRange::default(), &exclusions);
        assert_eq!(days.len(), 5);
    }

    #[test]
    fn sunday_to_thursday_week() {
        // Sun 2024-09-01 through Sat 2024-09-07.
        let range = DateRange::new(ymd(2024, 9, 1), ymd(2024, 9, 7)).unwrap();
        let week = WeekdayRange::new(Weekday::Sun, Weekday::Thu);
        let days = instructional_days(&range, week, &ExclusionSet::new());
        assert_eq!(days.first(), Some(&ymd(2024, 9, 1)));
        assert_eq!(days.last(), Some(&ymd(2024, 9, 5)));
        assert_eq!(days.len(), 5);
    }

    #[test]
    fn weekend_only_range_is_empty() {
        let range = DateRange::new(ymd(2024, 9, 7), ymd(2024, 9, 8)).unwrap();
        let days = instructional_days(&range, WeekdayRange::default(), &ExclusionSet::new());
        assert!(days.is_empty());
    }
}
