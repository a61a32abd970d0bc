//! Seq command: print a lazy date sequence.

use anyhow::{Result, bail};
use tracing::{info, info_span};

use almanac_calendar::{DateFormatter, date_sequence};

use crate::cli::SeqArgs;
use crate::convert;

/// Print dates from `args.from`, one `args.unit` apart.
pub fn run(args: SeqArgs, formatter: &DateFormatter) -> Result<()> {
    let _cmd = info_span!("seq").entered();

    if args.to.is_none() && args.limit.is_none() {
        bail!("unbounded sequence: pass --to or --limit");
    }
    let from = convert::parse_date_arg(formatter, &args.from)?;
    let to = args
        .to
        .as_deref()
        .map(|text| convert::parse_date_arg(formatter, text))
        .transpose()?;

    let mut printed = 0usize;
    for date in date_sequence(args.unit, from, to).take(args.limit.unwrap_or(usize::MAX)) {
        println!("{}", formatter.format(date, None)?);
        printed += 1;
    }
    info!(printed, unit = %args.unit, "sequence done");
    Ok(())
}
