mod cli;
mod config;
mod convert;
mod convert_cmd;
mod generate;
mod logging;
mod template_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::BellcalConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate(args) => {
            let config = BellcalConfig::load(cli.config.as_deref())?;
            generate::run(args, config)
        }
        Command::Template(args) => template_cmd::run(args),
        Command::Convert(args) => convert_cmd::run(args),
    }
}
