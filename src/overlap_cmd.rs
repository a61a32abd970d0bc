//! Overlap command: do two ranges share an instant?

use anyhow::Result;
use tracing::warn;

use almanac_calendar::{DateFormatter, DateRange, are_overlapping};

use crate::cli::OverlapArgs;
use crate::convert;

/// Print `true` if the two ranges overlap. Invalid ranges print `false`.
pub fn run(args: OverlapArgs, formatter: &DateFormatter) -> Result<()> {
    let parse = |text: &str| convert::parse_date_arg(formatter, text);
    let first = DateRange::new(parse(&args.start)?, parse(&args.end)?);
    let second = DateRange::new(parse(&args.other_start)?, parse(&args.other_end)?);

    for range in [&first, &second] {
        if !range.is_valid() {
            warn!(?range, "range end is not after its start");
        }
    }
    println!("{}", are_overlapping(&first, &second));
    Ok(())
}
