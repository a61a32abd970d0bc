//! Shift command: move a date by a number of units.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use almanac_calendar::{DateFormatter, later};

use crate::cli::ShiftArgs;
use crate::convert;

/// Print `args.date` moved by `args.amount` units.
pub fn run(args: ShiftArgs, formatter: &DateFormatter) -> Result<()> {
    let _cmd = info_span!("shift").entered();
    let date = convert::parse_date_arg(formatter, &args.date)?;

    let shifted = later(date, args.amount, args.unit)
        .with_context(|| format!("cannot shift {date} by {} {}", args.amount, args.unit))?;
    info!(%date, %shifted, "shifted");

    println!("{}", formatter.format(shifted, None)?);
    Ok(())
}
