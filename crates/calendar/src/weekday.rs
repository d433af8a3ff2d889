//! Weekday names and working-weekday ranges.

use chrono::Weekday;

use crate::error::CalendarError;

/// The seven weekdays in calendar order, Monday first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Parses an English weekday name, case-insensitively.
///
/// Full names (`"Wednesday"`) and three-letter abbreviations (`"wed"`) are
/// accepted.
///
/// # Errors
///
/// Returns [`CalendarError::UnknownWeekday`] for anything else.
pub fn parse_weekday(name: &str) -> Result<Weekday, CalendarError> {
    name.trim()
        .parse::<Weekday>()
        .map_err(|_| CalendarError::UnknownWeekday {
            name: name.to_string(),
        })
}

/// Returns the full English name of `day`.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// The weekdays on which classes are held, from `first` to `last`.
///
/// When `first` comes after `last` in Monday-first order the range wraps
/// over the weekend, so `Sunday..=Thursday` covers five days. A range is never
/// empty: `first == last` is a single working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayRange {
    first: Weekday,
    last: Weekday,
}

impl Default for WeekdayRange {
    /// Monday through Friday.
    fn default() -> Self {
        Self::new(Weekday::Mon, Weekday::Fri)
    }
}

impl WeekdayRange {
    /// Creates a range from its first and last working day.
    pub fn new(first: Weekday, last: Weekday) -> Self {
        Self { first, last }
    }

    /// Parses a range from two weekday names.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnknownWeekday`] for the first name that does
    /// not parse.
    pub fn parse(first: &str, last: &str) -> Result<Self, CalendarError> {
        Ok(Self::new(parse_weekday(first)?, parse_weekday(last)?))
    }

    /// Returns the first working day.
    pub fn first(self) -> Weekday {
        self.first
    }

    /// Returns the last working day.
    pub fn last(self) -> Weekday {
        self.last
    }

    /// Returns `true` if the range crosses the Sunday/Monday boundary.
    pub fn wraps(self) -> bool {
        self.first.num_days_from_monday() > self.last.num_days_from_monday()
    }

    /// Returns `true` if `day` is a working day.
    pub fn contains(self, day: Weekday) -> bool {
        let first = self.first.num_days_from_monday();
        let last = self.last.num_days_from_monday();
        let d = day.num_days_from_monday();
        if first <= last {
            first <= d && d <= last
        } else {
            d >= first || d <= last
        }
    }

    /// Returns the number of working days per week (1..=7).
    pub fn n_days(self) -> usize {
        let first = self.first.num_days_from_monday() as usize;
        let last = self.last.num_days_from_monday() as usize;
        if first <= last {
            last - first + 1
        } else {
            7 - first + last + 1
        }
    }

    /// Returns the working days in order, starting from `first`.
    pub fn days(self) -> Vec<Weekday> {
        let mut days = Vec::with_capacity(self.n_days());
        let mut day = self.first;
        days.push(day);
        while day != self.last {
            day = day.succ();
            days.push(day);
        }
        days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_names_any_case() {
        assert_eq!(parse_weekday("Monday").unwrap(), Weekday::Mon);
        assert_eq!(parse_weekday("WEDNESDAY").unwrap(), Weekday::Wed);
        assert_eq!(parse_weekday("sunday").unwrap(), Weekday::Sun);
    }

    #[test]
    fn parse_abbreviation() {
        assert_eq!(parse_weekday("thu").unwrap(), Weekday::Thu);
    }

    #[test]
    fn parse_trims() {
        assert_eq!(parse_weekday(" Friday ").unwrap(), Weekday::Fri);
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            parse_weekday("Caturday").unwrap_err(),
            CalendarError::UnknownWeekday {
                name: "Caturday".to_string()
            }
        );
    }

    #[test]
    fn names_round_trip() {
        for day in WEEKDAYS {
            assert_eq!(parse_weekday(weekday_name(day)).unwrap(), day);
        }
    }

    #[test]
    fn default_is_monday_to_friday() {
        let range = WeekdayRange::default();
        assert_eq!(
            range.days(),
            vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri
            ]
        );
        assert!(!range.wraps());
        assert!(!range.contains(Weekday::Sat));
        assert!(!range.contains(Weekday::Sun));
    }

    #[test]
    fn wrapping_range() {
        let range = WeekdayRange::new(Weekday::Sun, Weekday::Thu);
        assert!(range.wraps());
        assert_eq!(range.n_days(), 5);
        assert_eq!(
            range.days(),
            vec![
                Weekday::Sun,
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu
            ]
        );
        assert!(!range.contains(Weekday::Fri));
        assert!(!range.contains(Weekday::Sat));
    }

    #[test]
    fn single_day() {
        let range = WeekdayRange::new(Weekday::Sat, Weekday::Sat);
        assert_eq!(range.n_days(), 1);
        assert_eq!(range.days(), vec![Weekday::Sat]);
    }

    #[test]
    fn full_week() {
        let range = WeekdayRange::new(Weekday::Mon, Weekday::Sun);
        assert_eq!(range.n_days(), 7);
        assert!(WEEKDAYS.iter().all(|&d| range.contains(d)));
    }

    #[test]
    fn parse_range() {
        let range = WeekdayRange::parse("Sunday", "Thursday").unwrap();
        assert_eq!(range.first(), Weekday::Sun);
        assert_eq!(range.last(), Weekday::Thu);
        assert!(WeekdayRange::parse("Sunday", "Blursday").is_err());
    }
}
