//! Format command: parse a date and render it in another format.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use almanac_calendar::{DateFormatter, Field};

use crate::cli::FormatArgs;

/// Parse `args.date` and print it re-rendered.
pub fn run(args: FormatArgs, formatter: &DateFormatter) -> Result<()> {
    let _cmd = info_span!("format").entered();

    let input = args.input_format.as_deref().map(|k| formatter.descriptor(k));
    let output = args.format.as_deref().map(|k| formatter.descriptor(k));
    debug!(input = ?input, output = ?output, "resolved formats");

    let date = formatter
        .parse(&args.date, input.as_ref())
        .with_context(|| format!("failed to parse {:?}", args.date))?;
    let text = formatter
        .format(date, output.as_ref())
        .context("failed to render date")?;
    println!("{text}");

    if args.fields {
        for field in Field::ALL {
            println!("{field}\t{}", date.get(field));
        }
    }
    Ok(())
}
