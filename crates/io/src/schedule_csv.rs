//! Flat CSV bell schedules.
//!
//! A schedule CSV has one row per block:
//!
//! ```text
//! DAY, SUBJECT, START, END, ALTERNATE
//! Day 1, Block A, 12:05, 14:25, FALSE
//! Day 1, Block A, 11:45, 12:55, TRUE
//! ```
//!
//! Rows are folded into the same [`Schedule`] shape as a JSON schedule.

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use bellcal_schedule::{DaySchedule, Schedule, ScheduleBlock, parse_time};
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::{IoError, RowError};

/// Columns every schedule CSV must have, matched case-insensitively.
pub const CSV_HEADERS: [&str; 5] = ["DAY", "SUBJECT", "START", "END", "ALTERNATE"];

/// Column positions of the required headers.
struct Columns {
    day: usize,
    subject: usize,
    start: usize,
    end: usize,
    alternate: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self, Vec<String>> {
        let names: Vec<String> = headers
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_uppercase())
            .collect();
        let find = |wanted: &str| names.iter().position(|n| n == wanted);

        let found: Vec<Option<usize>> = CSV_HEADERS.iter().map(|&h| find(h)).collect();
        let missing: Vec<String> = CSV_HEADERS
            .iter()
            .zip(&found)
            .filter(|(_, idx)| idx.is_none())
            .map(|(h, _)| h.to_string())
            .collect();
        match found[..] {
            [Some(day), Some(subject), Some(start), Some(end), Some(alternate)] => Ok(Self {
                day,
                subject,
                start,
                end,
                alternate,
            }),
            _ => Err(missing),
        }
    }
}

/// Reads and folds a schedule CSV file.
///
/// # Errors
///
/// See [`parse_schedule_csv`]; file access failures are reported as
/// [`IoError::FileNotFound`] or [`IoError::Read`].
pub fn read_schedule_csv(path: &Path) -> Result<Schedule, IoError> {
    let file = std::fs::File::open(path).map_err(|e| IoError::read(path, e))?;
    parse_schedule_csv(file, path)
}

/// Folds schedule CSV rows from `reader` into a [`Schedule`].
///
/// Cells are trimmed. Every non-empty `DAY` becomes a rotation day, even if
/// none of its rows has a subject. Rows with an empty `SUBJECT` are skipped.
/// A row whose `ALTERNATE` cell is `true` (any case) goes to the alternate
/// section. The alternate section exists only if at least one row goes
/// there, and then has every rotation day, empty where no alternate rows
/// were given. `path` is used for error reporting only.
///
/// # Errors
///
/// Returns [`IoError::MissingHeaders`] if a required column is absent,
/// [`IoError::MalformedRows`] listing every row with a bad time or a subject
/// without a day, or [`IoError::Csv`] if the data cannot be decoded.
pub fn parse_schedule_csv<R: Read>(reader: R, path: &Path) -> Result<Schedule, IoError> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers().map_err(|e| IoError::csv(path, e))?.clone();
    let cols = Columns::locate(&headers).map_err(|missing| IoError::MissingHeaders {
        path: path.to_path_buf(),
        missing,
    })?;

    let mut days = BTreeSet::new();
    let mut standard = DaySchedule::new();
    let mut alternate_rows = Vec::new();
    let mut errors = Vec::new();

    for result in rdr.records() {
        let record = result.map_err(|e| IoError::csv(path, e))?;
        let line = record.position().map_or(0, |p| p.line());
        let cell = |i: usize| record.get(i).unwrap_or("");

        let day = cell(cols.day);
        let subject = cell(cols.subject);
        if !day.is_empty() {
            days.insert(day.to_string());
        }
        if subject.is_empty() {
            continue;
        }
        if day.is_empty() {
            errors.push(RowError {
                line,
                reason: format!("subject \"{subject}\" has no DAY"),
            });
            continue;
        }

        let block = match (parse_time(cell(cols.start)), parse_time(cell(cols.end))) {
            (Ok(start), Ok(end)) => ScheduleBlock::with_end(subject, start, end),
            (Err(e), _) | (_, Err(e)) => {
                errors.push(RowError {
                    line,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if cell(cols.alternate).eq_ignore_ascii_case("true") {
            alternate_rows.push((day.to_string(), block));
        } else {
            standard.push(day, block);
        }
    }

    if !errors.is_empty() {
        return Err(IoError::MalformedRows {
            path: path.to_path_buf(),
            errors,
        });
    }

    for day in &days {
        standard.ensure_day(day.as_str());
    }
    let alternate = (!alternate_rows.is_empty()).then(|| {
        let mut alternate = DaySchedule::new();
        for day in &days {
            alternate.ensure_day(day.as_str());
        }
        for (day, block) in alternate_rows {
            alternate.push(day, block);
        }
        alternate
    });

    debug!(
        path = %path.display(),
        n_days = days.len(),
        has_alternate = alternate.is_some(),
        "folded schedule CSV"
    );
    Ok(Schedule::new(standard, alternate))
}
