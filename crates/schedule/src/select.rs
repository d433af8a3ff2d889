//! Standard/alternate block selection for each school day.

use bellcal_calendar::SchoolDay;
use chrono::Weekday;

use crate::block::ScheduleBlock;
use crate::error::ScheduleError;
use crate::schedule::{DaySchedule, Schedule};

/// Which section of the schedule a day was served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// The regular rotation.
    Standard,
    /// The alternate rotation used on the designated weekday.
    Alternate,
}

impl Variant {
    /// Returns the section name as it appears in schedule files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Alternate => "alternate",
        }
    }
}

/// The blocks chosen for one school day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    key: &'a str,
    variant: Variant,
    blocks: &'a [ScheduleBlock],
}

impl<'a> Selection<'a> {
    /// Returns the rotation-day key.
    pub fn key(&self) -> &'a str {
        self.key
    }

    /// Returns the section the blocks came from.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the day's blocks in schedule order.
    pub fn blocks(&self) -> &'a [ScheduleBlock] {
        self.blocks
    }
}

/// Picks each school day's block list.
///
/// The rotation-day keys are fixed once, from the standard section in
/// lexical order, and the same key is looked up in whichever section applies.
/// A day uses the alternate section exactly when its weekday is the
/// configured alternate weekday.
#[derive(Debug, Clone)]
pub struct Selector<'a> {
    standard: &'a DaySchedule,
    alternate: Option<(Weekday, &'a DaySchedule)>,
    keys: Vec<&'a str>,
}

impl<'a> Selector<'a> {
    /// Creates a selector over `schedule`.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::MissingAlternateSchedule`] if `alternate_day`
    /// is set but the schedule has no alternate section, or
    /// [`ScheduleError::EmptyRotation`] if the standard section is empty.
    pub fn new(schedule: &'a Schedule, alternate_day: Option<Weekday>) -> Result<Self, ScheduleError> {
        let keys = schedule.rotation_keys();
        if keys.is_empty() {
            return Err(ScheduleError::EmptyRotation);
        }
        let alternate = match alternate_day {
            Some(weekday) => {
                let section = schedule
                    .alternate()
                    .ok_or(ScheduleError::MissingAlternateSchedule { weekday })?;
                Some((weekday, section))
            }
            None => None,
        };
        Ok(Self {
            standard: schedule.standard(),
            alternate,
            keys,
        })
    }

    /// Returns the rotation length.
    pub fn cycle_len(&self) -> usize {
        self.keys.len()
    }

    /// Returns the rotation-day keys in rotation order.
    pub fn rotation_keys(&self) -> &[&'a str] {
        &self.keys
    }

    /// Returns the configured alternate weekday.
    pub fn alternate_day(&self) -> Option<Weekday> {
        self.alternate.map(|(weekday, _)| weekday)
    }

    /// Chooses the blocks for `day`.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::RotationIndexOutOfRange`] if the day's index
    /// exceeds the cycle, or [`ScheduleError::MissingDay`] if the chosen
    /// section lacks the day's key.
    pub fn select(&self, day: &SchoolDay) -> Result<Selection<'a>, ScheduleError> {
        let index = day.rotation_index();
        let key = *self
            .keys
            .get(index)
            .ok_or(ScheduleError::RotationIndexOutOfRange {
                index,
                cycle_len: self.keys.len(),
            })?;

        let (variant, section) = match self.alternate {
            Some((weekday, alternate)) if weekday == day.weekday() => {
                (Variant::Alternate, alternate)
            }
            _ => (Variant::Standard, self.standard),
        };

        let blocks = section.get(key).ok_or_else(|| ScheduleError::MissingDay {
            section: variant.as_str(),
            key: key.to_string(),
        })?;

        Ok(Selection {
            key,
            variant,
            blocks,
        })
    }
}
