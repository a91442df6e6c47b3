//! UserApi trait and the HTTP implementation.
//!
//! The session only talks to [`UserApi`], so tests can substitute an
//! in-memory implementation for the network.

pub mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{User, UserId, UserPayload};

pub use http::HttpUserApi;

/// Errors from the user directory API.
///
/// The upstream error body is not parsed; it is only carried in the message.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// CRUD operations on the user collection.
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Fetch one page of users (pages start at 1).
    async fn list(&self, page: u32, limit: u32) -> Result<Vec<User>, ClientError>;

    /// Create a user; the server assigns the id.
    async fn create(&self, payload: &UserPayload) -> Result<User, ClientError>;

    /// Replace the user with the given id.
    async fn update(&self, id: UserId, payload: &UserPayload) -> Result<User, ClientError>;

    /// Remove the user with the given id.
    async fn delete(&self, id: UserId) -> Result<(), ClientError>;
}
