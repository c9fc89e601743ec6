//! Tracing subscriber setup for the command-line driver

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber, honouring `RUST_LOG` when set
///
/// Without `RUST_LOG` the filter is `info`, or `warn` when `quiet` is set.
/// Returns `false` if a subscriber was already installed.
pub fn init(quiet: bool) -> bool {
    let default_directive = if quiet { "warn" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_ok()
}
