//! Non-instructional day files.

use std::path::Path;

use bellcal_calendar::ExclusionSet;
use tracing::info;

use crate::error::IoError;

/// Reads a newline-delimited list of non-instructional dates.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] or [`IoError::Read`] if the file cannot
/// be read, and [`IoError::Calendar`] carrying every malformed line if any
/// line does not match `format`.
pub fn read_exclusions(path: &Path, format: &str) -> Result<ExclusionSet, IoError> {
    let text = std::fs::read_to_string(path).map_err(|e| IoError::read(path, e))?;
    let set = ExclusionSet::parse(&text, format).map_err(|source| IoError::Calendar {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), n_dates = set.len(), "read non-instructional days");
    Ok(set)
}
