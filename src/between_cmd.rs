//! Between command: elapsed time between two dates.

use anyhow::Result;
use tracing::debug;

use almanac_calendar::{DateFormatter, time_between};

use crate::cli::BetweenArgs;
use crate::convert;

/// Print the absolute time between `args.a` and `args.b` in `args.unit`.
pub fn run(args: BetweenArgs, formatter: &DateFormatter) -> Result<()> {
    let a = convert::parse_date_arg(formatter, &args.a)?;
    let b = convert::parse_date_arg(formatter, &args.b)?;
    let elapsed = time_between(a, b, args.unit);
    debug!(%a, %b, elapsed, unit = %args.unit, "time between");
    println!("{elapsed}");
    Ok(())
}
