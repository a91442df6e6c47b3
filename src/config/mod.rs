//! Configuration loading and layering.
//!
//! Handles `.roster.toml` loading, environment variable resolution,
//! and CLI flag merging with proper priority ordering.

pub mod loader;

pub use loader::{ApiConfig, Config, ConfigError, PaginationConfig};
