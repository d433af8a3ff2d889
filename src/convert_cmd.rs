//! Convert command: fold a CSV schedule into editable JSON.

use anyhow::{Context, Result};
use tracing::info;

use bellcal_io::{read_schedule_csv, write_schedule_json};

use crate::cli::ConvertArgs;
use crate::generate::expand_path;

/// Reads and validates the CSV schedule, then writes it as JSON.
pub fn run(args: ConvertArgs) -> Result<()> {
    let input = expand_path(&args.file);
    let output = match &args.output {
        Some(o) => expand_path(o),
        None => input.with_extension("json"),
    };

    let schedule = read_schedule_csv(&input)
        .with_context(|| format!("failed to read CSV schedule: {}", input.display()))?;
    schedule
        .validate()
        .with_context(|| format!("invalid schedule: {}", input.display()))?;
    write_schedule_json(&output, &schedule, args.force)
        .with_context(|| format!("failed to write JSON schedule: {}", output.display()))?;

    info!(
        input = %input.display(),
        output = %output.display(),
        cycle_len = schedule.cycle_len(),
        "converted schedule"
    );
    println!("Wrote {}", output.display());
    Ok(())
}
