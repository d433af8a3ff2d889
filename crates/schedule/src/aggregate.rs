//! Grouping of expanded events into per-subject streams.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::expand::{ExpandedDay, ExpandedEvent};

/// Name of the synthetic all-day stream that labels each school day.
pub const ROTATION_STREAM: &str = "Rotation Days";

/// Every event of one subject, in date order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectStream {
    subject: String,
    events: Vec<ExpandedEvent>,
}

impl SubjectStream {
    /// Returns the subject name.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the events in date order.
    pub fn events(&self) -> &[ExpandedEvent] {
        &self.events
    }
}

/// An all-day event naming a school day's rotation position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationDay {
    label: String,
    date: NaiveDate,
}

impl RotationDay {
    /// Returns the label, e.g. `day_3 - Day 012/180`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Output of [`aggregate`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Aggregate {
    subjects: Vec<SubjectStream>,
    rotation_days: Vec<RotationDay>,
    n_events: usize,
}

impl Aggregate {
    /// Returns the per-subject streams, ordered by subject name.
    pub fn subjects(&self) -> &[SubjectStream] {
        &self.subjects
    }

    /// Returns the stream for `subject`.
    pub fn subject(&self, subject: &str) -> Option<&SubjectStream> {
        self.subjects.iter().find(|s| s.subject == subject)
    }

    /// Returns one all-day event per school day, in date order.
    pub fn rotation_days(&self) -> &[RotationDay] {
        &self.rotation_days
    }

    /// Returns the total number of class events.
    pub fn n_events(&self) -> usize {
        self.n_events
    }
}

/// Groups the events of `days` by subject and builds the rotation-day stream.
///
/// Subjects are whatever names appear in the blocks. Each stream keeps the
/// order of `days`, so events are date-ascending. Rotation-day labels carry
/// the day key and the 1-based instructional-day count, followed by the
/// total number of instructional days when `show_total` is set.
pub fn aggregate(days: &[ExpandedDay], show_total: bool) -> Aggregate {
    let mut by_subject: BTreeMap<&str, Vec<ExpandedEvent>> = BTreeMap::new();
    let mut n_events = 0;
    for day in days {
        for event in day.events() {
            by_subject
                .entry(event.subject())
                .or_default()
                .push(event.clone());
            n_events += 1;
        }
    }

    let total = days.len();
    let rotation_days = days
        .iter()
        .enumerate()
        .map(|(i, day)| {
            let label = if show_total {
                format!("{} - Day {:03}/{}", day.key(), i + 1, total)
            } else {
                format!("{} - Day {:03}", day.key(), i + 1)
            };
            RotationDay {
                label,
                date: day.day().date(),
            }
        })
        .collect();

    Aggregate {
        subjects: by_subject
            .into_iter()
            .map(|(subject, events)| SubjectStream {
                subject: subject.to_string(),
                events,
            })
            .collect(),
        rotation_days,
        n_events,
    }
}
