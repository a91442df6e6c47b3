//! CLI command definitions, argument parsing and logging setup.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// The filter comes from `ROSTER_LOG` (e.g. `debug`, `roster=trace`) and
/// defaults to `warn`, so stdout stays clean for rendered output.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(roster::constants::ENV_LOG)
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
