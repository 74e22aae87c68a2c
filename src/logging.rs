// Logging setup: `log` macros backed by env_logger, written to stderr so stdout
// only ever carries the report.

use anyhow::{Context, Result};
use log::LevelFilter;

/// Level implied by the `-v`/`--quiet` flags.
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. `RUST_LOG`, when set, overrides the flags.
pub fn init(verbose: u8, quiet: bool) -> Result<()> {
    env_logger::Builder::new()
        .filter_level(level_for(verbose, quiet))
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env()
        .try_init()
        .context("Failed to initialize logger")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0, false), LevelFilter::Warn);
        assert_eq!(level_for(1, false), LevelFilter::Info);
        assert_eq!(level_for(2, false), LevelFilter::Debug);
        assert_eq!(level_for(7, false), LevelFilter::Trace);
    }

    #[test]
    fn quiet_wins() {
        assert_eq!(level_for(3, true), LevelFilter::Error);
    }
}
