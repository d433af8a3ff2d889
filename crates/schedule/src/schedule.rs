//! Standard and alternate day schedules.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::block::ScheduleBlock;
use crate::error::{BlockError, ScheduleError};

/// Blocks for every day of the rotation, keyed by rotation-day name
/// (`"day_1"`, `"Day 2"`, ...).
///
/// Keys are kept in lexical order; that order defines the rotation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DaySchedule {
    days: BTreeMap<String, Vec<ScheduleBlock>>,
}

impl DaySchedule {
    /// Creates an empty day schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the blocks of day `key`.
    pub fn get(&self, key: &str) -> Option<&[ScheduleBlock]> {
        self.days.get(key).map(Vec::as_slice)
    }

    /// Returns the rotation-day keys in lexical order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.days.keys().map(String::as_str)
    }

    /// Iterates `(key, blocks)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ScheduleBlock])> {
        self.days.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Returns the number of rotation days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns `true` if there are no rotation days.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Adds a day with no blocks if `key` is not present yet.
    pub fn ensure_day(&mut self, key: impl Into<String>) {
        self.days.entry(key.into()).or_default();
    }

    /// Appends `block` to day `key`, creating the day if needed.
    pub fn push(&mut self, key: impl Into<String>, block: ScheduleBlock) {
        self.days.entry(key.into()).or_default().push(block);
    }
}

impl FromIterator<(String, Vec<ScheduleBlock>)> for DaySchedule {
    fn from_iter<I: IntoIterator<Item = (String, Vec<ScheduleBlock>)>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

/// A complete bell schedule: the standard rotation and an optional alternate
/// rotation used on one designated weekday.
///
/// The rotation length is the number of standard days.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Schedule {
    #[serde(alias = "Standard", alias = "STANDARD")]
    standard: DaySchedule,
    #[serde(default, alias = "Alternate", alias = "ALTERNATE", skip_serializing_if = "Option::is_none")]
    alternate: Option<DaySchedule>,
}

impl Schedule {
    /// Creates a schedule from its two sections.
    pub fn new(standard: DaySchedule, alternate: Option<DaySchedule>) -> Self {
        Self {
            standard,
            alternate,
        }
    }

    /// Returns the standard section.
    pub fn standard(&self) -> &DaySchedule {
        &self.standard
    }

    /// Returns the alternate section, if any.
    pub fn alternate(&self) -> Option<&DaySchedule> {
        self.alternate.as_ref()
    }

    /// Returns the number of days in the rotation.
    pub fn cycle_len(&self) -> usize {
        self.standard.len()
    }

    /// Returns the rotation-day keys in rotation order.
    pub fn rotation_keys(&self) -> Vec<&str> {
        self.standard.keys().collect()
    }

    /// Returns every distinct subject name across both sections.
    pub fn subjects(&self) -> BTreeSet<&str> {
        self.sections()
            .flat_map(|(_, days)| days.iter())
            .flat_map(|(_, blocks)| blocks.iter().map(ScheduleBlock::name))
            .collect()
    }

    /// Checks the schedule before it is used.
    ///
    /// The standard section must have at least one day, the alternate section
    /// (if present) must have exactly the same day keys, and every block must
    /// have a name and end on the day it starts. All block problems are
    /// collected before returning.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::EmptyRotation`],
    /// [`ScheduleError::AlternateKeyMismatch`] or
    /// [`ScheduleError::InvalidBlocks`].
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.standard.is_empty() {
            return Err(ScheduleError::EmptyRotation);
        }

        if let Some(alternate) = &self.alternate {
            let standard_keys: BTreeSet<&str> = self.standard.keys().collect();
            let alternate_keys: BTreeSet<&str> = alternate.keys().collect();
            if standard_keys != alternate_keys {
                return Err(ScheduleError::AlternateKeyMismatch {
                    missing: standard_keys
                        .difference(&alternate_keys)
                        .map(|k| k.to_string())
                        .collect(),
                    unexpected: alternate_keys
                        .difference(&standard_keys)
                        .map(|k| k.to_string())
                        .collect(),
                });
            }
        }

        let mut errors = Vec::new();
        for (section, days) in self.sections() {
            for (day, blocks) in days.iter() {
                for (index, block) in blocks.iter().enumerate() {
                    let mut push = |reason: String| {
                        errors.push(BlockError {
                            section,
                            day: day.to_string(),
                            index,
                            reason,
                        })
                    };
                    if block.name().trim().is_empty() {
                        push("block has no name".to_string());
                    }
                    if let Err(e) = block.end() {
                        push(e.to_string());
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ScheduleError::InvalidBlocks { errors })
        }
    }

    fn sections(&self) -> impl Iterator<Item = (&'static str, &DaySchedule)> {
        std::iter::once(("standard", &self.standard))
            .chain(self.alternate.iter().map(|a| ("alternate", a)))
    }
}
