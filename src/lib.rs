//! roster — admin client for a REST user directory (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod client;
pub mod config;
pub mod constants;
pub mod env;
pub mod models;
pub mod output;
pub mod pagination;
pub mod session;
pub mod store;
pub mod validate;
