//! Error types for the bellcal-schedule crate.

use std::fmt;

use chrono::{NaiveTime, Weekday};

/// Location and cause of one invalid block in a schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockError {
    /// `"standard"` or `"alternate"`.
    pub section: &'static str,
    /// Rotation-day key the block belongs to.
    pub day: String,
    /// 0-based position of the block within its day.
    pub index: usize,
    /// Why the block was rejected.
    pub reason: String,
}

impl fmt::Display for BlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}[{}]: {}",
            self.section, self.day, self.index, self.reason
        )
    }
}

/// Error type for all fallible operations in the bellcal-schedule crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    /// Returned when a time of day is not in `HH:MM` form.
    #[error("invalid time \"{value}\" (expected HH:MM)")]
    InvalidTime {
        /// The value that failed to parse.
        value: String,
    },

    /// Returned when a block gives neither or both of `duration` and `end`.
    #[error("block \"{name}\" must set exactly one of duration or end")]
    AmbiguousEnd {
        /// Subject name of the block.
        name: String,
    },

    /// Returned when the standard schedule has no rotation days.
    #[error("standard schedule has no rotation days")]
    EmptyRotation,

    /// Returned when an alternate weekday is configured but the schedule has
    /// no alternate section.
    #[error("alternate day {weekday} requested but the schedule has no alternate section")]
    MissingAlternateSchedule {
        /// The configured alternate weekday.
        weekday: Weekday,
    },

    /// Returned when the alternate section's day keys differ from the
    /// standard section's.
    #[error(
        "alternate schedule days do not match standard days (missing: [{}], unexpected: [{}])",
        .missing.join(", "),
        .unexpected.join(", ")
    )]
    AlternateKeyMismatch {
        /// Standard keys absent from the alternate section.
        missing: Vec<String>,
        /// Alternate keys absent from the standard section.
        unexpected: Vec<String>,
    },

    /// Returned when a block would end after midnight or before it starts.
    #[error("block \"{name}\" starting {start} runs past midnight")]
    OvernightBlock {
        /// Subject name of the block.
        name: String,
        /// Start time of the block.
        start: NaiveTime,
    },

    /// Returned when one or more blocks fail validation.
    ///
    /// Every failing block is collected before this error is produced.
    #[error(
        "{count} invalid block(s): {details}",
        count = .errors.len(),
        details = join_blocks(.errors)
    )]
    InvalidBlocks {
        /// Every failing block, standard section first.
        errors: Vec<BlockError>,
    },

    /// Returned when a rotation index has no matching day key.
    #[error("rotation index {index} out of range for a {cycle_len}-day cycle")]
    RotationIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of days in the cycle.
        cycle_len: usize,
    },

    /// Returned when a day key is missing from the selected section.
    #[error("{section} schedule has no day \"{key}\"")]
    MissingDay {
        /// `"standard"` or `"alternate"`.
        section: &'static str,
        /// The missing rotation-day key.
        key: String,
    },
}

fn join_blocks(errors: &[BlockError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
