//! Log output for the CLI
//!
//! The library crates log through the `log` facade. A `tracing-subscriber`
//! fmt subscriber on stderr picks those records up through its log bridge,
//! keeping stdout for operator progress.

use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. The level comes from `--verbose` only.
pub(crate) fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    // A subscriber is already installed only under test harnesses
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init();
}
