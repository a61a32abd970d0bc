use tracing_subscriber::EnvFilter;

/// Targets that get the verbosity level: the binary and the calendar library.
const CRATE_TARGETS: &[&str] = &["almanac", "almanac_calendar"];

/// Installs the global subscriber, logging to stderr so that stdout carries
/// only command output.
///
/// `-v` enables info, `-vv` debug and `-vvv` the per-call trace spans of the
/// formatter. Without flags only warnings are shown. A set `RUST_LOG` replaces
/// the whole filter.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let default_filter = CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
