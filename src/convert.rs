//! Pure conversion functions: config strings -> crate API types.

use anyhow::{Context, Result};

use bellcal_calendar::{
    DateRange, NaiveDate, Weekday, WeekdayRange, parse_date, parse_weekday, validate_format,
};
use bellcal_io::WriterConfig;

use crate::config::GenerateToml;

/// Checks a strftime date format, naming the setting it came from.
pub fn parse_date_format(format: &str, setting: &str) -> Result<String> {
    validate_format(format).with_context(|| format!("bad {setting}"))?;
    Ok(format.to_string())
}

/// Parses the optional alternate weekday.
pub fn parse_alternate_day(name: Option<&str>) -> Result<Option<Weekday>> {
    name.map(|n| parse_weekday(n).context("bad alternate day"))
        .transpose()
}

/// Builds the working-week range from the configured first and last days.
pub fn build_week(generate: &GenerateToml) -> Result<WeekdayRange> {
    WeekdayRange::parse(&generate.week_start, &generate.week_end).context("bad school week")
}

/// Parses the start and end dates into a range.
pub fn build_date_range(start: &str, end: &str, format: &str) -> Result<DateRange> {
    let start: NaiveDate = parse_date(start, format).context("bad start date")?;
    let end: NaiveDate = parse_date(end, format).context("bad end date")?;
    Ok(DateRange::new(start, end)?)
}

/// Builds a [`WriterConfig`]; the output date format falls back to the input one.
pub fn build_writer_config(generate: &GenerateToml) -> Result<WriterConfig> {
    let format = match &generate.output_date_format {
        Some(f) => parse_date_format(f, "output date format")?,
        None => parse_date_format(&generate.date_format, "date format")?,
    };
    Ok(WriterConfig::default()
        .with_date_format(format)
        .with_combined(generate.combined))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternate_day_is_optional() {
        assert_eq!(parse_alternate_day(None).unwrap(), None);
        assert_eq!(
            parse_alternate_day(Some("wednesday")).unwrap(),
            Some(Weekday::Wed)
        );
    }

    #[test]
    fn unknown_weekday_lists_choices() {
        let err = parse_alternate_day(Some("Caturday")).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("bad alternate day"));
        assert!(msg.contains("Monday"));
    }

    #[test]
    fn week_wraps() {
        let generate = GenerateToml {
            week_start: "Sunday".to_string(),
            week_end: "Thursday".to_string(),
            ..GenerateToml::default()
        };
        assert_eq!(build_week(&generate).unwrap().n_days(), 5);
    }

    #[test]
    fn date_range_rejects_reversed_dates() {
        assert!(build_date_range("2024/09/06", "2024/09/02", "%Y/%m/%d").is_err());
        let range = build_date_range("2024/09/02", "2024/09/06", "%Y/%m/%d").unwrap();
        assert_eq!(range.n_days(), 5);
    }

    #[test]
    fn bad_start_date_is_named() {
        let err = build_date_range("09/02/2024", "2024/09/06", "%Y/%m/%d").unwrap_err();
        assert!(format!("{err:#}").contains("bad start date"));
    }

    #[test]
    fn writer_date_format_falls_back_to_input() {
        let generate = GenerateToml {
            date_format: "%d.%m.%Y".to_string(),
            combined: true,
            ..GenerateToml::default()
        };
        let writer = build_writer_config(&generate).unwrap();
        assert_eq!(writer.date_format(), "%d.%m.%Y");
        assert!(writer.combined());

        let generate = GenerateToml {
            output_date_format: Some("%m/%d/%Y".to_string()),
            ..generate
        };
        assert_eq!(build_writer_config(&generate).unwrap().date_format(), "%m/%d/%Y");
    }

    #[test]
    fn invalid_output_format_rejected() {
        let generate = GenerateToml {
            output_date_format: Some("%Q".to_string()),
            ..GenerateToml::default()
        };
        assert!(build_writer_config(&generate).is_err());
    }
}
