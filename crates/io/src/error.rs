//! Error types for bellcal-io.

use std::fmt;
use std::path::PathBuf;

use bellcal_calendar::CalendarError;
use bellcal_schedule::ScheduleError;

/// One data row of a schedule CSV that could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// 1-based line number in the file.
    pub line: u64,
    /// Why the row was rejected.
    pub reason: String,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

/// Error type for all fallible operations in the bellcal-io crate.
///
/// Covers filesystem failures, malformed schedule and exclusion files, and
/// problems naming or writing the output CSV files.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when a file exists but cannot be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path being read.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// Returned when a file cannot be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Path being written.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// Returned when an output directory cannot be created.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// Returned when a file would be overwritten.
    #[error("{} already exists, refusing to overwrite", path.display())]
    AlreadyExists {
        /// The existing file.
        path: PathBuf,
    },

    /// Wraps a JSON syntax or shape error in a schedule file.
    #[error("invalid schedule JSON in {}: {reason}", path.display())]
    Json {
        /// Schedule file.
        path: PathBuf,
        /// Description from the JSON parser, including line and column.
        reason: String,
    },

    /// Wraps an error originating from the CSV library.
    #[error("csv error in {}: {reason}", path.display())]
    Csv {
        /// File being read or written.
        path: PathBuf,
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when a schedule CSV lacks required columns.
    #[error("{} is missing headers: {}", path.display(), missing.join(", "))]
    MissingHeaders {
        /// Schedule file.
        path: PathBuf,
        /// Required headers that were not found.
        missing: Vec<String>,
    },

    /// Returned when one or more rows of a schedule CSV are malformed.
    ///
    /// Every failing row is collected before this error is produced.
    #[error(
        "{count} malformed row(s) in {}: {details}",
        path.display(),
        count = errors.len(),
        details = join_rows(errors)
    )]
    MalformedRows {
        /// Schedule file.
        path: PathBuf,
        /// Every failing row, in file order.
        errors: Vec<RowError>,
    },

    /// Wraps a calendar error tied to a file.
    #[error("{}: {source}", path.display())]
    Calendar {
        /// File the error relates to.
        path: PathBuf,
        /// Underlying calendar failure.
        #[source]
        source: CalendarError,
    },

    /// Wraps a schedule validation error tied to a file.
    #[error("{}: {source}", path.display())]
    Schedule {
        /// Schedule file.
        path: PathBuf,
        /// Underlying schedule failure.
        #[source]
        source: ScheduleError,
    },

    /// Returned when the output settings are unusable, e.g. a bad date format.
    #[error("invalid output configuration: {source}")]
    Config {
        /// Underlying calendar failure.
        #[source]
        source: CalendarError,
    },

    /// Returned when a stream name produces an empty file name.
    #[error("cannot derive a file name from \"{name}\"")]
    EmptySlug {
        /// The stream name.
        name: String,
    },

    /// Returned when two streams would be written to the same file.
    #[error("\"{first}\" and \"{second}\" would both be written to {slug}.csv")]
    SlugCollision {
        /// The shared file stem.
        slug: String,
        /// First stream name.
        first: String,
        /// Second stream name.
        second: String,
    },
}

fn join_rows(errors: &[RowError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl IoError {
    /// Maps a failed read of `path`, distinguishing a missing file.
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound { path }
        } else {
            IoError::Read { path, source }
        }
    }

    /// Maps a CSV library failure on `path`.
    pub(crate) fn csv(path: impl Into<PathBuf>, e: csv::Error) -> Self {
        IoError::Csv {
            path: path.into(),
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.csv");
    }

    #[test]
    fn read_maps_not_found() {
        let err = IoError::read(
            "/tmp/missing.txt",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(matches!(err, IoError::FileNotFound { .. }));
    }

    #[test]
    fn read_keeps_other_kinds() {
        let err = IoError::read(
            "/root/secret.txt",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, IoError::Read { .. }));
        assert!(err.to_string().starts_with("failed to read /root/secret.txt"));
    }

    #[test]
    fn display_missing_headers() {
        let err = IoError::MissingHeaders {
            path: PathBuf::from("bells.csv"),
            missing: vec!["END".to_string(), "ALTERNATE".to_string()],
        };
        assert_eq!(err.to_string(), "bells.csv is missing headers: END, ALTERNATE");
    }

    #[test]
    fn display_malformed_rows() {
        let err = IoError::MalformedRows {
            path: PathBuf::from("bells.csv"),
            errors: vec![
                RowError {
                    line: 3,
                    reason: "invalid time \"9am\" (expected HH:MM)".to_string(),
                },
                RowError {
                    line: 7,
                    reason: "subject without a day".to_string(),
                },
            ],
        };
        assert_eq!(
            err.to_string(),
            "2 malformed row(s) in bells.csv: line 3: invalid time \"9am\" (expected HH:MM); \
             line 7: subject without a day"
        );
    }

    #[test]
    fn display_slug_collision() {
        let err = IoError::SlugCollision {
            slug: "block_a".to_string(),
            first: "Block A".to_string(),
            second: "block-a".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "\"Block A\" and \"block-a\" would both be written to block_a.csv"
        );
    }

    #[test]
    fn calendar_source_is_exposed() {
        use std::error::Error;
        let err = IoError::Calendar {
            path: PathBuf::from("holidays.txt"),
            source: CalendarError::InvalidDateFormat {
                format: "%Q".to_string(),
            },
        };
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "holidays.txt: invalid date format: \"%Q\"");
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IoError>();
    }
}
