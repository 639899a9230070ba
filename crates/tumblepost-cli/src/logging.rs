//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// The filter used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "info" } else { "error" }
}

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence. Otherwise progress lines are shown only when
/// `verbose` is set; errors are always shown.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
