use bellcal_calendar::{CalendarError, DEFAULT_DATE_FORMAT, ExclusionSet};

#[test]
fn two_bad_lines_and_a_blank_report_two_errors() {
    let text = "2024/09/02\n2024-09-03\n\n   \nLabor Day\n2024/09/05\n";
    let err = ExclusionSet::parse(text, DEFAULT_DATE_FORMAT).unwrap_err();
    let CalendarError::MalformedDates { errors, .. } = &err else {
        panic!("expected MalformedDates, got {err:?}");
    };
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].line, 2);
    assert_eq!(errors[1].line, 5);
    assert_eq!(errors[1].raw, "Labor Day");
    assert!(err.to_string().starts_with("2 malformed date line(s)"));
}

#[test]
fn custom_format() {
    let set = ExclusionSet::parse("09/04/2024\n12/25/2024\n", "%m/%d/%Y").unwrap();
    assert_eq!(set.len(), 2);
}

#[test]
fn raw_text_keeps_leading_whitespace_only() {
    let err = ExclusionSet::parse("  oops  \n", DEFAULT_DATE_FORMAT).unwrap_err();
    let CalendarError::MalformedDates { errors, .. } = err else {
        panic!("expected MalformedDates");
    };
    assert_eq!(errors[0].raw, "  oops");
}
