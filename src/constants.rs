//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and API defaults so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "roster";

/// Crate version, as reported by `roster version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple the binary was built for (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.roster.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".roster.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "roster";

/// Base URL of the user directory API.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Number of users requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 6;

/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// ── Environment variable names ──────────────────────────────────────

pub const ENV_BASE_URL: &str = "ROSTER_BASE_URL";
pub const ENV_PAGE_SIZE: &str = "ROSTER_PAGE_SIZE";
pub const ENV_TIMEOUT_SECS: &str = "ROSTER_TIMEOUT_SECS";
/// `tracing-subscriber` filter directive, e.g. `ROSTER_LOG=debug`.
pub const ENV_LOG: &str = "ROSTER_LOG";
