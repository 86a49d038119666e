//! Logging setup for the binary
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the binary. Logs go to stderr so they never mix with command output.

use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Map the number of `-v` flags to a level
///
/// No flag shows warnings and errors only.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber
///
/// Must be called at most once per process.
pub fn init(verbosity: u8) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(level_for(verbosity)),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, LevelFilter::WARN)]
    #[case(1, LevelFilter::INFO)]
    #[case(2, LevelFilter::DEBUG)]
    #[case(3, LevelFilter::TRACE)]
    #[case(9, LevelFilter::TRACE)]
    fn test_level_for(#[case] verbosity: u8, #[case] expected: LevelFilter) {
        assert_eq!(level_for(verbosity), expected);
    }
}
