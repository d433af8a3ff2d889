//! Template command: write a blank schedule for hand editing.

use anyhow::{Context, Result, bail};
use tracing::info;

use bellcal_io::write_schedule_json;
use bellcal_schedule::blank_schedule;

use crate::cli::TemplateArgs;
use crate::generate::expand_path;

/// Writes the blank schedule, refusing to overwrite an existing file.
pub fn run(args: TemplateArgs) -> Result<()> {
    if args.days == 0 || args.blocks == 0 {
        bail!("--days and --blocks must both be at least 1");
    }
    let path = expand_path(&args.file);
    let schedule = blank_schedule(args.days, args.blocks);
    write_schedule_json(&path, &schedule, false)
        .with_context(|| format!("failed to write template: {}", path.display()))?;
    info!(days = args.days, blocks = args.blocks, "template written");
    println!("Wrote blank schedule to {}", path.display());
    Ok(())
}
