use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use bellcal_calendar::{assign_rotation, instructional_days, weekday_name};
use bellcal_io::{output_dir, read_exclusions, read_schedule, write_streams};
use bellcal_schedule::{Selector, aggregate, expand_days};

use crate::cli::GenerateArgs;
use crate::config::{BellcalConfig, GenerateToml};
use crate::convert;

/// Run the full generation pipeline.
pub fn run(args: GenerateArgs, config: BellcalConfig) -> Result<()> {
    let _cmd = info_span!("generate").entered();
    let settings = merge(&args, config.generate);

    // Step 1: Build typed settings, failing before any file is touched
    let date_format = convert::parse_date_format(&settings.date_format, "date format")?;
    let range = convert::build_date_range(&args.start, &args.end, &date_format)?;
    let week = convert::build_week(&settings)?;
    let alternate_day = convert::parse_alternate_day(settings.alternate_day.as_deref())?;
    let writer_cfg = convert::build_writer_config(&settings)?;

    // Step 2: Read inputs
    let schedule_path = expand_path(&args.schedule);
    let schedule = read_schedule(&schedule_path)
        .with_context(|| format!("failed to load schedule: {}", schedule_path.display()))?;
    let exclusions_path = expand_path(&args.non_instruction);
    let exclusions = read_exclusions(&exclusions_path, &date_format).with_context(|| {
        format!(
            "failed to load non-instructional days: {}",
            exclusions_path.display()
        )
    })?;

    // Step 3: Calendar
    let dates = instructional_days(&range, week, &exclusions);
    info!(
        start = %range.start(),
        end = %range.end(),
        week_start = weekday_name(week.first()),
        week_end = weekday_name(week.last()),
        n_excluded = exclusions.len(),
        n_school_days = dates.len(),
        "computed instructional days"
    );
    let school_days = assign_rotation(&dates, schedule.cycle_len())?;

    // Step 4: Expand and group
    let selector = Selector::new(&schedule, alternate_day)?;
    let days = expand_days(&school_days, &selector)?;
    let agg = aggregate(&days, settings.show_total);
    info!(
        n_subjects = agg.subjects().len(),
        n_events = agg.n_events(),
        "expanded schedule"
    );

    // Step 5: Write
    let dir = output_dir(&expand_path(&settings.output), &schedule_path);
    let written = write_streams(&dir, &agg, &days, &writer_cfg)
        .with_context(|| format!("failed to write calendar files to {}", dir.display()))?;

    println!(
        "Wrote {} files for {} school days to {}",
        written.len(),
        school_days.len(),
        dir.display()
    );
    Ok(())
}

/// Applies command-line flags over the config file values.
fn merge(args: &GenerateArgs, mut settings: GenerateToml) -> GenerateToml {
    if let Some(ref f) = args.date_format {
        settings.date_format = f.clone();
    }
    if let Some(ref f) = args.output_date_format {
        settings.output_date_format = Some(f.clone());
    }
    if let Some(ref d) = args.alternate_day {
        settings.alternate_day = Some(d.clone());
    }
    if let Some(ref d) = args.week_start {
        settings.week_start = d.clone();
    }
    if let Some(ref d) = args.week_end {
        settings.week_end = d.clone();
    }
    if let Some(ref o) = args.output {
        settings.output = o.clone();
    }
    if args.combined {
        settings.combined = true;
    }
    if args.no_total {
        settings.show_total = false;
    }
    settings
}

/// Expands a leading `~` to the home directory.
pub fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}
