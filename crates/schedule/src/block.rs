//! Schedule blocks: one subject meeting at a fixed time of day.

use chrono::{NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Format for block times in schedule files and output rows.
pub const TIME_FORMAT: &str = "%H:%M";

/// Parses an `HH:MM` time of day.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidTime`] for anything else.
pub fn parse_time(value: &str) -> Result<NaiveTime, ScheduleError> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).map_err(|_| ScheduleError::InvalidTime {
        value: value.to_string(),
    })
}

/// Renders a time of day as `HH:MM`.
pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// How a block's end is specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockEnd {
    /// Length of the block in minutes.
    Duration(u32),
    /// Explicit end time.
    At(NaiveTime),
}

/// A single block of a day's bell schedule.
///
/// In schedule files a block is an object with `name`, `start` and exactly
/// one of `duration` (minutes) or `end` (`HH:MM`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBlock", into = "RawBlock")]
pub struct ScheduleBlock {
    name: String,
    start: NaiveTime,
    end: BlockEnd,
}

impl ScheduleBlock {
    /// Creates a block that lasts `minutes` from `start`.
    pub fn with_duration(name: impl Into<String>, start: NaiveTime, minutes: u32) -> Self {
        Self {
            name: name.into(),
            start,
            end: BlockEnd::Duration(minutes),
        }
    }

    /// Creates a block running from `start` to `end`.
    pub fn with_end(name: impl Into<String>, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            name: name.into(),
            start,
            end: BlockEnd::At(end),
        }
    }

    /// Returns the subject name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the start time.
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// Returns how the end of the block was specified.
    pub fn end_kind(&self) -> BlockEnd {
        self.end
    }

    /// Returns the end time.
    ///
    /// A duration is added to the start without wrapping.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::OvernightBlock`] if the block would end after
    /// midnight, or if an explicit end is earlier than the start.
    pub fn end(&self) -> Result<NaiveTime, ScheduleError> {
        let end = match self.end {
            BlockEnd::Duration(minutes) => {
                let (end, wrapped) = self
                    .start
                    .overflowing_add_signed(TimeDelta::minutes(i64::from(minutes)));
                (wrapped == 0).then_some(end)
            }
            BlockEnd::At(end) => (end >= self.start).then_some(end),
        };
        end.ok_or_else(|| ScheduleError::OvernightBlock {
            name: self.name.clone(),
            start: self.start,
        })
    }
}

/// On-disk shape of a [`ScheduleBlock`].
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBlock {
    #[serde(alias = "subject", alias = "SUBJECT", alias = "NAME")]
    name: String,
    #[serde(alias = "START")]
    start: String,
    #[serde(default, alias = "DURATION", skip_serializing_if = "Option::is_none")]
    duration: Option<u32>,
    #[serde(default, alias = "END", skip_serializing_if = "Option::is_none")]
    end: Option<String>,
}

impl TryFrom<RawBlock> for ScheduleBlock {
    type Error = ScheduleError;

    fn try_from(raw: RawBlock) -> Result<Self, Self::Error> {
        let start = parse_time(&raw.start)?;
        match (raw.duration, raw.end) {
            (Some(minutes), None) => Ok(Self::with_duration(raw.name, start, minutes)),
            (None, Some(end)) => Ok(Self::with_end(raw.name, start, parse_time(&end)?)),
            _ => Err(ScheduleError::AmbiguousEnd { name: raw.name }),
        }
    }
}

impl From<ScheduleBlock> for RawBlock {
    fn from(block: ScheduleBlock) -> Self {
        let (duration, end) = match block.end {
            BlockEnd::Duration(minutes) => (Some(minutes), None),
            BlockEnd::At(end) => (None, Some(format_time(end))),
        };
        Self {
            name: block.name,
            start: format_time(block.start),
            duration,
            end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn parse_time_valid() {
        assert_eq!(parse_time("09:00").unwrap(), hm(9, 0));
        assert_eq!(parse_time(" 13:10 ").unwrap(), hm(13, 10));
    }

    #[test]
    fn parse_time_invalid() {
        assert_eq!(
            parse_time("9am").unwrap_err(),
            ScheduleError::InvalidTime {
                value: "9am".to_string()
            }
        );
        assert!(parse_time("25:00").is_err());
    }

    #[test]
    fn duration_end() {
        let block = ScheduleBlock::with_duration("Block A", hm(9, 0), 50);
        assert_eq!(block.end().unwrap(), hm(9, 50));
    }

    #[test]
    fn zero_duration() {
        let block = ScheduleBlock::with_duration("Assembly", hm(8, 0), 0);
        assert_eq!(block.end().unwrap(), hm(8, 0));
    }

    #[test]
    fn explicit_end_passes_through() {
        let block = ScheduleBlock::with_end("Block C", hm(13, 10), hm(14, 20));
        assert_eq!(block.end().unwrap(), hm(14, 20));
    }

    #[test]
    fn duration_past_midnight() {
        let block = ScheduleBlock::with_duration("Late", hm(23, 30), 45);
        assert_eq!(
            block.end().unwrap_err(),
            ScheduleError::OvernightBlock {
                name: "Late".to_string(),
                start: hm(23, 30),
            }
        );
    }

    #[test]
    fn duration_ending_exactly_at_midnight() {
        let block = ScheduleBlock::with_duration("Late", hm(23, 0), 60);
        assert!(block.end().is_err());
    }

    #[test]
    fn explicit_end_before_start() {
        let block = ScheduleBlock::with_end("Backwards", hm(14, 0), hm(13, 0));
        assert!(block.end().is_err());
    }

    #[test]
    fn deserialize_duration_form() {
        let block: ScheduleBlock =
            serde_json::from_str(r#"{"name": "Block A", "start": "09:00", "duration": 50}"#)
                .unwrap();
        assert_eq!(block, ScheduleBlock::with_duration("Block A", hm(9, 0), 50));
    }

    #[test]
    fn deserialize_end_form() {
        let block: ScheduleBlock =
            serde_json::from_str(r#"{"SUBJECT": "Block A", "START": "12:05", "END": "14:25"}"#)
                .unwrap();
        assert_eq!(block, ScheduleBlock::with_end("Block A", hm(12, 5), hm(14, 25)));
    }

    #[test]
    fn deserialize_rejects_both_ends() {
        let result: Result<ScheduleBlock, _> = serde_json::from_str(
            r#"{"name": "X", "start": "09:00", "duration": 5, "end": "09:05"}"#,
        );
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("exactly one of duration or end"), "{msg}");
    }

    #[test]
    fn deserialize_rejects_bad_time() {
        let result: Result<ScheduleBlock, _> =
            serde_json::from_str(r#"{"name": "X", "start": "nine", "duration": 5}"#);
        assert!(result.unwrap_err().to_string().contains("invalid time"));
    }

    #[test]
    fn serialize_keeps_end_form() {
        let json =
            serde_json::to_string(&ScheduleBlock::with_end("Lunch", hm(11, 45), hm(12, 55))).unwrap();
        assert_eq!(json, r#"{"name":"Lunch","start":"11:45","end":"12:55"}"#);
        let json =
            serde_json::to_string(&ScheduleBlock::with_duration("Lunch", hm(11, 45), 70)).unwrap();
        assert_eq!(json, r#"{"name":"Lunch","start":"11:45","duration":70}"#);
    }
}
