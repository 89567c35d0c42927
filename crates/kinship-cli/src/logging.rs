//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Filter used when `--verbose` is passed.
pub const VERBOSE_FILTER: &str = "debug";

/// Picks the filter directive: `--verbose` beats the configured one.
pub fn effective_filter(configured: &str, verbose: bool) -> &str {
    if verbose { VERBOSE_FILTER } else { configured }
}

/// Installs the global fmt subscriber. `RUST_LOG` overrides `filter`.
///
/// Logs go to stderr so `kinship list` output stays clean on stdout.
pub fn init_logging(filter: &str, verbose: bool) {
    let fallback = effective_filter(filter, verbose).to_string();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with_writer(std::io::stderr)
        .init();
}
