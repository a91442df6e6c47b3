//! In-memory list of the users currently shown.

use crate::models::{User, UserId};

/// Ordered collection of loaded user records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list (reset fetch).
    pub fn replace(&mut self, users: Vec<User>) {
        self.users = users;
    }

    /// Append a page of results.
    pub fn append(&mut self, users: Vec<User>) {
        self.users.extend(users);
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn as_slice(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
