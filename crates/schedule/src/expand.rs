//! Expansion of block lists into dated events.

use bellcal_calendar::SchoolDay;
use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

use crate::block::ScheduleBlock;
use crate::error::ScheduleError;
use crate::select::{Selector, Variant};

/// One class meeting on one date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExpandedEvent {
    subject: String,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
}

impl ExpandedEvent {
    /// Creates an event.
    pub fn new(subject: impl Into<String>, date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            subject: subject.into(),
            date,
            start,
            end,
        }
    }

    /// Returns the subject name.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the start time.
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// Returns the end time.
    pub fn end(&self) -> NaiveTime {
        self.end
    }
}

/// Binds every block of a day to `date`.
///
/// # Errors
///
/// Returns [`ScheduleError::OvernightBlock`] for the first block that would
/// end after midnight.
pub fn expand_day(
    date: NaiveDate,
    blocks: &[ScheduleBlock],
) -> Result<Vec<ExpandedEvent>, ScheduleError> {
    blocks
        .iter()
        .map(|block| {
            Ok(ExpandedEvent::new(
                block.name(),
                date,
                block.start(),
                block.end()?,
            ))
        })
        .collect()
}

/// A school day together with its rotation key and expanded events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedDay {
    day: SchoolDay,
    key: String,
    variant: Variant,
    events: Vec<ExpandedEvent>,
}

impl ExpandedDay {
    /// Returns the school day.
    pub fn day(&self) -> SchoolDay {
        self.day
    }

    /// Returns the rotation-day key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns which section the events came from.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the day's events in block order.
    pub fn events(&self) -> &[ExpandedEvent] {
        &self.events
    }
}

/// Selects and expands the blocks of every school day, in order.
///
/// # Errors
///
/// Propagates the first selection or expansion failure.
pub fn expand_days(
    days: &[SchoolDay],
    selector: &Selector<'_>,
) -> Result<Vec<ExpandedDay>, ScheduleError> {
    let expanded = days
        .iter()
        .map(|day| {
            let selection = selector.select(day)?;
            Ok(ExpandedDay {
                day: *day,
                key: selection.key().to_string(),
                variant: selection.variant(),
                events: expand_day(day.date(), selection.blocks())?,
            })
        })
        .collect::<Result<Vec<_>, ScheduleError>>()?;
    debug!(
        n_days = expanded.len(),
        n_alternate = expanded
            .iter()
            .filter(|d| d.variant == Variant::Alternate)
            .count(),
        "expanded school days"
    );
    Ok(expanded)
}
