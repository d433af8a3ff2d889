//! Calendar-import CSV output.
//!
//! Every subject stream and the rotation-day stream land in their own
//! `<slug>.csv` inside one output directory. File names are checked for
//! collisions before anything is written, so a failed run never leaves a
//! partial set behind.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use bellcal_calendar::{DEFAULT_DATE_FORMAT, NaiveDate, format_date, validate_format};
use bellcal_schedule::{Aggregate, ExpandedDay, ExpandedEvent, ROTATION_STREAM, format_time};
use tracing::{debug, info};

use crate::error::IoError;
use crate::slug::slugify;

/// Header of every per-subject file and of the combined file.
pub const SUBJECT_HEADERS: [&str; 4] = ["Subject", "Start Date", "Start Time", "End Time"];

/// Header of the all-day rotation file.
pub const ROTATION_HEADERS: [&str; 4] = ["Subject", "Start Date", "End Date", "All Day Event"];

/// Stream name of the optional file holding every event.
pub const COMBINED_STREAM: &str = "All Events";

/// Configuration for writing event streams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    /// strftime format for every date column.
    date_format: String,
    /// Whether to also write the combined file.
    combined: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            combined: false,
        }
    }
}

impl WriterConfig {
    /// Sets the output date format.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Enables or disables the combined `all_events.csv` file.
    pub fn with_combined(mut self, combined: bool) -> Self {
        self.combined = combined;
        self
    }

    /// Returns the output date format.
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Returns whether the combined file is written.
    pub fn combined(&self) -> bool {
        self.combined
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Config`] if the date format does not parse or
    /// cannot render a plain date (e.g. `%z`).
    fn validate(&self) -> Result<(), IoError> {
        validate_format(&self.date_format).map_err(|source| IoError::Config { source })?;
        format_date(NaiveDate::MIN, &self.date_format)
            .map(drop)
            .map_err(|source| IoError::Config { source })
    }
}

/// Returns `<root>/<schedule file stem>`, the directory a run writes into.
pub fn output_dir(root: &Path, schedule_path: &Path) -> PathBuf {
    match schedule_path.file_stem() {
        Some(stem) => root.join(stem),
        None => root.to_path_buf(),
    }
}

/// One file to be written: stream name plus its file stem.
struct Target<'a> {
    name: &'a str,
    slug: String,
}

/// Slugs every stream name and rejects empty or shared file names.
fn plan<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<Vec<Target<'a>>, IoError> {
    let mut seen: BTreeMap<String, &str> = BTreeMap::new();
    let mut targets = Vec::new();
    for name in names {
        let slug = slugify(name);
        if slug.is_empty() {
            return Err(IoError::EmptySlug {
                name: name.to_string(),
            });
        }
        if let Some(first) = seen.insert(slug.clone(), name) {
            return Err(IoError::SlugCollision {
                slug,
                first: first.to_string(),
                second: name.to_string(),
            });
        }
        targets.push(Target { name, slug });
    }
    Ok(targets)
}

/// Writes every stream of `aggregate` into `dir`, creating it if needed.
///
/// `days` is only read when the combined file is enabled; it supplies the
/// date-then-block ordering of that file. Returns the written paths in
/// write order: subjects by name, then the rotation file, then the combined
/// file.
///
/// # Errors
///
/// Returns [`IoError::Config`] for a bad date format,
/// [`IoError::EmptySlug`] or [`IoError::SlugCollision`] if two streams
/// cannot get distinct file names, and [`IoError::CreateDir`] or
/// [`IoError::Csv`] on filesystem failures.
pub fn write_streams(
    dir: &Path,
    aggregate: &Aggregate,
    days: &[ExpandedDay],
    config: &WriterConfig,
) -> Result<Vec<PathBuf>, IoError> {
    config.validate()?;

    let mut names: Vec<&str> = aggregate.subjects().iter().map(|s| s.subject()).collect();
    names.push(ROTATION_STREAM);
    if config.combined {
        names.push(COMBINED_STREAM);
    }
    let targets = plan(names)?;

    std::fs::create_dir_all(dir).map_err(|source| IoError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(targets.len());
    let n_subjects = aggregate.subjects().len();
    for (target, stream) in targets.iter().zip(aggregate.subjects()) {
        let path = dir.join(format!("{}.csv", target.slug));
        write_events(&path, stream.events(), &config.date_format)?;
        debug!(subject = target.name, path = %path.display(), n_events = stream.events().len(), "wrote subject file");
        written.push(path);
    }

    let rotation = &targets[n_subjects];
    let path = dir.join(format!("{}.csv", rotation.slug));
    write_rotation(&path, aggregate, &config.date_format)?;
    debug!(path = %path.display(), n_days = aggregate.rotation_days().len(), "wrote rotation file");
    written.push(path);

    if let Some(combined) = targets.get(n_subjects + 1) {
        let path = dir.join(format!("{}.csv", combined.slug));
        let events: Vec<ExpandedEvent> = days.iter().flat_map(|d| d.events().iter().cloned()).collect();
        write_events(&path, &events, &config.date_format)?;
        debug!(path = %path.display(), n_events = events.len(), "wrote combined file");
        written.push(path);
    }

    info!(
        dir = %dir.display(),
        n_files = written.len(),
        n_events = aggregate.n_events(),
        "wrote calendar files"
    );
    Ok(written)
}

fn writer(path: &Path) -> Result<csv::Writer<std::fs::File>, IoError> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| IoError::csv(path, e))
}

fn write_events(path: &Path, events: &[ExpandedEvent], date_format: &str) -> Result<(), IoError> {
    let mut wtr = writer(path)?;
    wtr.write_record(SUBJECT_HEADERS)
        .map_err(|e| IoError::csv(path, e))?;
    for event in events {
        let date = format_date(event.date(), date_format)
            .map_err(|source| IoError::Config { source })?;
        wtr.write_record([
            event.subject(),
            date.as_str(),
            format_time(event.start()).as_str(),
            format_time(event.end()).as_str(),
        ])
        .map_err(|e| IoError::csv(path, e))?;
    }
    wtr.flush().map_err(|source| IoError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_rotation(path: &Path, aggregate: &Aggregate, date_format: &str) -> Result<(), IoError> {
    let mut wtr = writer(path)?;
    wtr.write_record(ROTATION_HEADERS)
        .map_err(|e| IoError::csv(path, e))?;
    for day in aggregate.rotation_days() {
        let date = format_date(day.date(), date_format)
            .map_err(|source| IoError::Config { source })?;
        wtr.write_record([day.label(), date.as_str(), date.as_str(), "True"])
            .map_err(|e| IoError::csv(path, e))?;
    }
    wtr.flush().map_err(|source| IoError::Write {
        path: path.to_path_buf(),
        source,
    })
}
