//! Bounds command: first and last instant of an enclosing period.

use anyhow::{Context, Result};

use almanac_calendar::{DateFormatter, beginning_of, end_of};

use crate::cli::BoundsArgs;
use crate::convert;

/// Print the beginning and end of the `args.unit` period around `args.date`.
pub fn run(args: BoundsArgs, formatter: &DateFormatter) -> Result<()> {
    let date = convert::parse_date_arg(formatter, &args.date)?;
    let start = beginning_of(date, args.unit).context("cannot compute period start")?;
    let end = end_of(date, args.unit).context("cannot compute period end")?;
    println!("{}", formatter.format(start, None)?);
    println!("{}", formatter.format(end, None)?);
    Ok(())
}
