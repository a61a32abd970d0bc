mod between_cmd;
mod bounds_cmd;
mod cli;
mod config;
mod convert;
mod format_cmd;
mod logging;
mod overlap_cmd;
mod seq_cmd;
mod shift_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::AlmanacConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AlmanacConfig::load(cli.config.as_deref())?;
    let formatter = convert::build_formatter(&config.format, cli.locale.as_deref())?;
    tracing::debug!(locale = %formatter.locale(), "formatter ready");

    match cli.command {
        Command::Format(args) => format_cmd::run(args, &formatter),
        Command::Shift(args) => shift_cmd::run(args, &formatter),
        Command::Seq(args) => seq_cmd::run(args, &formatter),
        Command::Between(args) => between_cmd::run(args, &formatter),
        Command::Bounds(args) => bounds_cmd::run(args, &formatter),
        Command::Overlap(args) => overlap_cmd::run(args, &formatter),
    }
}
