//! Shared types used across all modules.
//!
//! User records as the API sees them and the draft the client edits.
//! Other modules import from here rather than reaching into each other's
//! internals.

pub mod draft;
pub mod user;

pub use draft::{Draft, DraftField};
pub use user::{Company, User, UserId, UserPayload};
