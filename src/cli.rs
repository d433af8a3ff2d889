use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Bell schedule to calendar-import CSV generator.
#[derive(Parser)]
#[command(
    name = "bellcal",
    version,
    about = "Turn a rotating bell schedule into per-subject calendar-import CSV files"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a TOML configuration file (default: bellcal.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate calendar files for a school year.
    Generate(GenerateArgs),
    /// Write a blank schedule for hand editing.
    Template(TemplateArgs),
    /// Convert a CSV schedule to JSON.
    Convert(ConvertArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Schedule definition (.json, or .csv with DAY,SUBJECT,START,END,ALTERNATE).
    #[arg(short, long)]
    pub schedule: PathBuf,

    /// First date of the school year.
    #[arg(long)]
    pub start: String,

    /// Last date of the school year.
    #[arg(long)]
    pub end: String,

    /// File of non-instructional dates, one per line.
    #[arg(short, long = "non-instruction")]
    pub non_instruction: PathBuf,

    /// strftime format of the input dates [config default: %Y/%m/%d].
    #[arg(long)]
    pub date_format: Option<String>,

    /// strftime format of the dates written to the CSV files [default: input format].
    #[arg(long)]
    pub output_date_format: Option<String>,

    /// Weekday that follows the alternate schedule.
    #[arg(short, long)]
    pub alternate_day: Option<String>,

    /// First day of the school week [config default: Monday].
    #[arg(long)]
    pub week_start: Option<String>,

    /// Last day of the school week [config default: Friday].
    #[arg(long)]
    pub week_end: Option<String>,

    /// Directory the schedule's output folder is created in [config default: ~/Desktop].
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write all_events.csv with every class of every subject.
    #[arg(long)]
    pub combined: bool,

    /// Leave the day total out of rotation-day labels.
    #[arg(long)]
    pub no_total: bool,
}

/// Arguments for the `template` subcommand.
#[derive(clap::Args)]
pub struct TemplateArgs {
    /// Path of the JSON file to create.
    pub file: PathBuf,

    /// Number of rotation days.
    #[arg(short, long, default_value_t = bellcal_schedule::DEFAULT_TEMPLATE_DAYS)]
    pub days: usize,

    /// Number of blocks per day.
    #[arg(short, long, default_value_t = bellcal_schedule::DEFAULT_TEMPLATE_BLOCKS)]
    pub blocks: usize,
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// CSV schedule to convert.
    pub file: PathBuf,

    /// Output JSON path [default: input path with a .json extension].
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it exists.
    #[arg(short, long)]
    pub force: bool,
}
