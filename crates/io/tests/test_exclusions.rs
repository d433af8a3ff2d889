//! Integration tests for non-instructional day files.

use bellcal_calendar::{CalendarError, NaiveDate};
use bellcal_io::{IoError, read_exclusions};

#[test]
fn reads_dates_and_skips_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("holidays.txt");
    std::fs::write(&path, "2024/09/04\n\n2024/11/28\n").unwrap();
    let set = read_exclusions(&path, "%Y/%m/%d").unwrap();
    assert_eq!(set.len(), 2);
    assert!(set.contains(NaiveDate::from_ymd_opt(2024, 9, 4).unwrap()));
}

#[test]
fn two_bad_lines_two_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("holidays.txt");
    std::fs::write(&path, "2024/09/04\n2024-09-05\n\nsoon\n2024/11/28\n").unwrap();
    match read_exclusions(&path, "%Y/%m/%d").unwrap_err() {
        IoError::Calendar {
            source: CalendarError::MalformedDates { errors, .. },
            ..
        } => {
            assert_eq!(errors.len(), 2);
            assert_eq!(errors[0].line, 2);
            assert_eq!(errors[1].line, 4);
            assert_eq!(errors[1].raw, "soon");
        }
        other => panic!("expected MalformedDates, got {other:?}"),
    }
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_exclusions(&dir.path().join("none.txt"), "%Y/%m/%d").unwrap_err();
    assert!(matches!(err, IoError::FileNotFound { .. }));
}
