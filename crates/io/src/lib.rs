//! # bellcal-io
//!
//! Reads schedule definitions (JSON or CSV) and non-instructional day lists,
//! and writes the per-subject calendar-import CSV files.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `reader` | Format dispatch, JSON schedules and schedule saving |
//! | `schedule_csv` | Flat `DAY, SUBJECT, START, END, ALTERNATE` schedules |
//! | `exclusions` | Newline-delimited date lists |
//! | `writer` | Per-stream CSV output |
//! | `slug` | File names derived from stream names |
//! | `error` | Error types |

mod error;
mod exclusions;
mod reader;
mod schedule_csv;
mod slug;
mod writer;

pub use error::{IoError, RowError};
pub use exclusions::read_exclusions;
pub use reader::{ScheduleFormat, read_schedule, read_schedule_json, write_schedule_json};
pub use schedule_csv::{CSV_HEADERS, parse_schedule_csv, read_schedule_csv};
pub use slug::slugify;
pub use writer::{
    COMBINED_STREAM, ROTATION_HEADERS, SUBJECT_HEADERS, WriterConfig, output_dir, write_streams,
};
