//! Tracing setup for the shell.
//!
//! The filter comes from `log_level` in jotter.toml (`warn` by default) and
//! accepts full `EnvFilter` directives such as `jotterapp=debug`. Logs go to
//! stderr so they never mix with shell output.

use tracing_subscriber::EnvFilter;

const FALLBACK_LEVEL: &str = "warn";

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL))
}

pub fn init(level: &str) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    // A subscriber may already be installed (tests); keep it.
    if subscriber.try_init().is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
