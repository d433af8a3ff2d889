use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "bellcal.toml";

/// Top-level bellcal configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct BellcalConfig {
    /// Defaults for the `generate` subcommand.
    #[serde(default)]
    pub generate: GenerateToml,
}

impl BellcalConfig {
    /// Loads `path`, or `bellcal.toml` if it exists, or the built-in defaults.
    ///
    /// An explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.is_file() {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                fallback
            }
        };
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config = Self::parse(&text)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parses TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateToml {
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default)]
    pub output_date_format: Option<String>,
    #[serde(default)]
    pub alternate_day: Option<String>,
    #[serde(default = "default_week_start")]
    pub week_start: String,
    #[serde(default = "default_week_end")]
    pub week_end: String,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub combined: bool,
    #[serde(default = "default_true")]
    pub show_total: bool,
}

impl Default for GenerateToml {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            output_date_format: None,
            alternate_day: None,
            week_start: default_week_start(),
            week_end: default_week_end(),
            output: default_output(),
            combined: false,
            show_total: true,
        }
    }
}

fn default_date_format() -> String {
    bellcal_calendar::DEFAULT_DATE_FORMAT.to_string()
}
fn default_week_start() -> String {
    "Monday".to_string()
}
fn default_week_end() -> String {
    "Friday".to_string()
}
fn default_output() -> PathBuf {
    PathBuf::from("~/Desktop")
}
fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = BellcalConfig::parse("").unwrap();
        let generate = config.generate;
        assert_eq!(generate.date_format, "%Y/%m/%d");
        assert_eq!(generate.week_start, "Monday");
        assert_eq!(generate.week_end, "Friday");
        assert_eq!(generate.output, PathBuf::from("~/Desktop"));
        assert!(generate.alternate_day.is_none());
        assert!(!generate.combined);
        assert!(generate.show_total);
    }

    #[test]
    fn partial_table_keeps_other_defaults() {
        let config = BellcalConfig::parse(
            "[generate]\nalternate_day = \"Wednesday\"\nweek_start = \"Sunday\"\nweek_end = \"Thursday\"\n",
        )
        .unwrap();
        assert_eq!(config.generate.alternate_day.as_deref(), Some("Wednesday"));
        assert_eq!(config.generate.week_start, "Sunday");
        assert_eq!(config.generate.date_format, "%Y/%m/%d");
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(BellcalConfig::parse("[generate]\ncolour = \"blue\"\n").is_err());
        assert!(BellcalConfig::parse("[output]\ndir = \"/tmp\"\n").is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = BellcalConfig::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config"));
    }
}
