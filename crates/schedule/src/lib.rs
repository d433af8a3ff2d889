//! # bellcal-schedule
//!
//! Rotating bell schedules and their expansion into dated class events.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     S["Schedule (standard / alternate)"] -->|"Selector::new()"| T["Selector"]
//!     D["Vec of SchoolDay"] --> E
//!     T -->|"expand_days()"| E["Vec of ExpandedDay"]
//!     E -->|"aggregate()"| A["Aggregate"]
//!     A --> F["SubjectStream per subject"]
//!     A --> G["RotationDay per school day"]
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `block` | Schedule blocks and `HH:MM` time handling |
//! | `schedule` | Day schedules, the two-section schedule and its validation |
//! | `select` | Standard/alternate selection per school day |
//! | `expand` | Block expansion into dated events |
//! | `aggregate` | Per-subject grouping and rotation-day labels |
//! | `template` | Blank schedule skeletons |
//! | `error` | Error types |

mod aggregate;
mod block;
mod error;
mod expand;
mod schedule;
mod select;
mod template;

pub use aggregate::{Aggregate, ROTATION_STREAM, RotationDay, SubjectStream, aggregate};
pub use block::{BlockEnd, ScheduleBlock, TIME_FORMAT, format_time, parse_time};
pub use error::{BlockError, ScheduleError};
pub use expand::{ExpandedDay, ExpandedEvent, expand_day, expand_days};
pub use schedule::{DaySchedule, Schedule};
pub use select::{Selection, Selector, Variant};
pub use template::{DEFAULT_TEMPLATE_BLOCKS, DEFAULT_TEMPLATE_DAYS, blank_schedule};
