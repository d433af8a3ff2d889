//! Schedule file loading and saving.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use bellcal_schedule::Schedule;
use tracing::info;

use crate::error::IoError;
use crate::schedule_csv::read_schedule_csv;

// ---------------------------------------------------------------------------
// ScheduleFormat
// ---------------------------------------------------------------------------

/// On-disk format of a schedule file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleFormat {
    /// Hand-authored JSON with `standard` and `alternate` sections.
    Json,
    /// Flat CSV with `DAY, SUBJECT, START, END, ALTERNATE` columns.
    Csv,
}

impl ScheduleFormat {
    /// Picks the format from the file extension: `.csv` (any case) is CSV,
    /// everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Json,
        }
    }
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Reads a schedule in whichever format its extension names and validates it.
///
/// # Errors
///
/// Returns the reader's error for the format, or [`IoError::Schedule`] if the
/// parsed schedule fails [`Schedule::validate`].
pub fn read_schedule(path: &Path) -> Result<Schedule, IoError> {
    let format = ScheduleFormat::from_path(path);
    let schedule = match format {
        ScheduleFormat::Json => read_schedule_json(path)?,
        ScheduleFormat::Csv => read_schedule_csv(path)?,
    };
    schedule.validate().map_err(|source| IoError::Schedule {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        ?format,
        cycle_len = schedule.cycle_len(),
        n_subjects = schedule.subjects().len(),
        has_alternate = schedule.alternate().is_some(),
        "loaded schedule"
    );
    Ok(schedule)
}

/// Reads a JSON schedule without validating it.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] or [`IoError::Read`] for file access
/// failures and [`IoError::Json`] for syntax or shape errors.
pub fn read_schedule_json(path: &Path) -> Result<Schedule, IoError> {
    let text = std::fs::read_to_string(path).map_err(|e| IoError::read(path, e))?;
    serde_json::from_str(&text).map_err(|e| IoError::Json {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Writes `schedule` as pretty-printed JSON.
///
/// Unless `overwrite` is set an existing file is left alone. Missing parent
/// directories are created.
///
/// # Errors
///
/// Returns [`IoError::AlreadyExists`] when refusing to overwrite, or
/// [`IoError::CreateDir`] / [`IoError::Write`] on filesystem failures.
pub fn write_schedule_json(path: &Path, schedule: &Schedule, overwrite: bool) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| IoError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let mut file = options.open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::AlreadyExists {
            IoError::AlreadyExists {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Write {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let mut json = serde_json::to_string_pretty(schedule).map_err(|e| IoError::Json {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    json.push('\n');
    file.write_all(json.as_bytes())
        .map_err(|source| IoError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), "wrote schedule JSON");
    Ok(())
}
