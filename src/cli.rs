use std::path::PathBuf;

use almanac_calendar::Unit;
use clap::{Parser, Subcommand};

/// Almanac calendar toolkit.
#[derive(Parser)]
#[command(
    name = "almanac",
    version,
    about = "Calendar arithmetic, ranges and named date formats"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured locale ("us" or "ru").
    #[arg(short, long, global = true)]
    pub locale: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Parse a date and render it in another format.
    Format(FormatArgs),
    /// Move a date by a number of units.
    Shift(ShiftArgs),
    /// Print a sequence of dates one unit apart.
    Seq(SeqArgs),
    /// Print the elapsed time between two dates.
    Between(BetweenArgs),
    /// Print the first and last instant of the period around a date.
    Bounds(BoundsArgs),
    /// Check whether two date ranges overlap.
    Overlap(OverlapArgs),
}

/// Arguments for the `format` subcommand.
#[derive(clap::Args)]
pub struct FormatArgs {
    /// Date to render.
    pub date: String,

    /// Format name or pattern the input is written in.
    #[arg(short, long)]
    pub input_format: Option<String>,

    /// Format name or pattern to render with.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Also print every calendar field.
    #[arg(long)]
    pub fields: bool,
}

/// Arguments for the `shift` subcommand.
#[derive(clap::Args)]
pub struct ShiftArgs {
    /// Starting date.
    pub date: String,

    /// Number of units to move; negative moves backward.
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub amount: i64,

    /// Unit key (year, month, week, day, hour, minute, second, millisecond).
    #[arg(short, long)]
    pub unit: Unit,
}

/// Arguments for the `seq` subcommand.
#[derive(clap::Args)]
pub struct SeqArgs {
    /// First date of the sequence.
    pub from: String,

    /// Step unit.
    #[arg(short, long)]
    pub unit: Unit,

    /// Exclusive upper bound.
    #[arg(short, long)]
    pub to: Option<String>,

    /// Maximum number of dates to print.
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Arguments for the `between` subcommand.
#[derive(clap::Args)]
pub struct BetweenArgs {
    /// First date.
    pub a: String,

    /// Second date.
    pub b: String,

    /// Unit to express the elapsed time in.
    #[arg(short, long, default_value = "second")]
    pub unit: Unit,
}

/// Arguments for the `bounds` subcommand.
#[derive(clap::Args)]
pub struct BoundsArgs {
    /// Date inside the period.
    pub date: String,

    /// Period unit (year, month, week, day, hour, minute, second).
    #[arg(short, long)]
    pub unit: Unit,
}

/// Arguments for the `overlap` subcommand.
#[derive(clap::Args)]
pub struct OverlapArgs {
    /// Start of the first range.
    pub start: String,

    /// End of the first range (exclusive).
    pub end: String,

    /// Start of the second range.
    pub other_start: String,

    /// End of the second range (exclusive).
    pub other_end: String,
}
