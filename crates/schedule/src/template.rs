//! Blank schedule skeletons for hand editing.

use chrono::NaiveTime;

use crate::block::ScheduleBlock;
use crate::schedule::{DaySchedule, Schedule};

/// Default number of rotation days in a blank schedule.
pub const DEFAULT_TEMPLATE_DAYS: usize = 8;

/// Default number of blocks per day in a blank schedule.
pub const DEFAULT_TEMPLATE_BLOCKS: usize = 8;

/// Builds a schedule with `days` rotation days of `blocks` empty blocks each,
/// identical in the standard and alternate sections.
///
/// Day keys are `day_1`, `day_2`, ...; with ten or more days the number is
/// zero padded (`day_01`) so that lexical key order matches rotation order.
/// Every block is unnamed, starts at `00:00` and lasts zero minutes.
pub fn blank_schedule(days: usize, blocks: usize) -> Schedule {
    let width = days.to_string().len();
    let day: DaySchedule = (1..=days)
        .map(|i| {
            let block = ScheduleBlock::with_duration("", NaiveTime::default(), 0);
            (format!("day_{i:0width$}"), vec![block; blocks])
        })
        .collect();
    Schedule::new(day.clone(), Some(day))
}
