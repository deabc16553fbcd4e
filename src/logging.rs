//! Diagnostic logging on stderr; stdout stays reserved for command output.

use tracing_subscriber::EnvFilter;

/// Env var with a `tracing` filter directive, e.g. `zeitkonto=debug`.
pub const LOG_ENV: &str = "ZEITKONTO_LOG";

/// Filter precedence: `--verbose`, then `ZEITKONTO_LOG`, then the configured
/// level, then `warn`.
pub fn build_filter(config_level: &str, verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(config_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

pub fn init_logging(config_level: &str, verbose: bool) {
    // a second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config_level, verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
