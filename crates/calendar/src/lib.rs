//! # bellcal-calendar
//!
//! Works out which calendar dates are school days and where each one falls in
//! a repeating N-day rotation.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["DateRange (start..=end)"] -->|".iter()"| B["every date"]
//!     B -->|"instructional_days()"| C["school dates"]
//!     W["WeekdayRange"] --> C
//!     X["ExclusionSet"] --> C
//!     C -->|"assign_rotation()"| D["Vec of SchoolDay"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use bellcal_calendar::{
//!     DateRange, ExclusionSet, WeekdayRange, assign_rotation, instructional_days, parse_date,
//! };
//!
//! let fmt = "%Y/%m/%d";
//! let range = DateRange::new(parse_date("2024/09/02", fmt)?, parse_date("2024/09/06", fmt)?)?;
//! let exclusions = ExclusionSet::parse("2024/09/04\n", fmt)?;
//!
//! let dates = instructional_days(&range, WeekdayRange::default(), &exclusions);
//! let days = assign_rotation(&dates, 2)?;
//! let indices: Vec<usize> = days.iter().map(|d| d.rotation_index()).collect();
//! assert_eq!(indices, vec![0, 1, 0, 1]);
//! # Ok::<(), bellcal_calendar::CalendarError>(())
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `range` | Inclusive date ranges and their iterator |
//! | `weekday` | Weekday names and working-weekday ranges |
//! | `exclusion` | Non-instructional date sets and their text parser |
//! | `filter` | Instructional-day selection |
//! | `rotation` | Rotation index assignment |
//! | `format` | strftime-style date parsing and formatting |
//! | `error` | Error types |

mod error;
mod exclusion;
mod filter;
mod format;
mod range;
mod rotation;
mod weekday;

pub use chrono::{NaiveDate, Weekday};
pub use error::{CalendarError, LineError};
pub use exclusion::ExclusionSet;
pub use filter::instructional_days;
pub use format::{DEFAULT_DATE_FORMAT, format_date, parse_date, validate_format};
pub use range::{DateRange, Dates};
pub use rotation::{SchoolDay, assign_rotation};
pub use weekday::{WEEKDAYS, WeekdayRange, parse_weekday, weekday_name};
