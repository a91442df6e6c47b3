//! The form draft: transient edit buffer for create and update.

use strum::{Display, EnumString};

use super::user::{Company, User, UserId, UserPayload};

/// Editable field of a [`Draft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum DraftField {
    FirstName,
    LastName,
    Email,
    Department,
}

/// Field values for the user being created or edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Set when the draft was loaded from an existing record.
    pub id: Option<UserId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

impl Draft {
    /// Copy an existing record into a draft.
    ///
    /// The name is split on its first space only: `"Mary Ann Smith"` becomes
    /// `"Mary"` / `"Ann Smith"`, and a single word leaves the last name empty.
    pub fn from_user(user: &User) -> Self {
        let (first, last) = user
            .name
            .split_once(' ')
            .unwrap_or((user.name.as_str(), ""));
        Self {
            id: Some(user.id),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: user.email.clone(),
            department: user.company.name.clone(),
        }
    }

    /// Overwrite a single field.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::FirstName => self.first_name = value,
            DraftField::LastName => self.last_name = value,
            DraftField::Email => self.email = value,
            DraftField::Department => self.department = value,
        }
    }

    /// Read a single field.
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::FirstName => &self.first_name,
            DraftField::LastName => &self.last_name,
            DraftField::Email => &self.email,
            DraftField::Department => &self.department,
        }
    }

    /// Build the request body sent to the API.
    pub fn to_payload(&self) -> UserPayload {
        UserPayload {
            id: self.id,
            name: format!("{} {}", self.first_name, self.last_name),
            email: self.email.clone(),
            company: Company {
                name: self.department.clone(),
            },
        }
    }
}
