//! User management session: list, paginate, create, edit and delete.
//!
//! A [`UserSession`] owns all of the screen state in one [`SessionState`]
//! and mutates it only through the operations below. Operations take
//! `&mut self`, so a page response can never be applied after a later
//! reset on the same session.

use std::sync::Arc;

use thiserror::Error;

use crate::client::{ClientError, UserApi};
use crate::models::{Draft, DraftField, User, UserId};
use crate::pagination::Cursor;
use crate::store::UserStore;
use crate::validate::{self, ValidationError};

/// Failure of a session operation.
///
/// `Display` is the banner text shown to the user; the underlying cause
/// is available through `source()`.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to fetch users")]
    FetchFailed(#[source] ClientError),

    #[error("Failed to save user")]
    SaveFailed(#[source] ClientError),

    #[error("Failed to delete user.")]
    DeleteFailed(#[source] ClientError),

    #[error("{0}")]
    ValidationFailed(ValidationError),
}

/// Everything the session shows, in one place.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub users: UserStore,
    pub draft: Draft,
    pub editing: bool,
    pub cursor: Cursor,
    /// Banner message from the most recent failure.
    pub error: Option<String>,
}

/// Whether a fetch replaces the list or extends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchMode {
    Reset,
    Append,
}

/// Drives the user list against a [`UserApi`].
pub struct UserSession {
    api: Arc<dyn UserApi>,
    page_size: u32,
    state: SessionState,
}

impl UserSession {
    /// Create a session. A page size of 0 is treated as 1.
    pub fn new(api: Arc<dyn UserApi>, page_size: u32) -> Self {
        Self {
            api,
            page_size: page_size.max(1),
            state: SessionState::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn users(&self) -> &[User] {
        self.state.users.as_slice()
    }

    pub fn cursor(&self) -> &Cursor {
        &self.state.cursor
    }

    pub fn draft(&self) -> &Draft {
        &self.state.draft
    }

    pub fn is_editing(&self) -> bool {
        self.state.editing
    }

    /// Current banner message, if any.
    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Load the first page, replacing whatever is listed.
    pub async fn mount(&mut self) -> Result<(), SessionError> {
        self.refresh().await
    }

    /// Fetch the next page if more may exist and nothing is in flight.
    ///
    /// Returns `Ok(false)` when the request was ignored.
    pub async fn load_more(&mut self) -> Result<bool, SessionError> {
        let Some(page) = self.state.cursor.advance() else {
            return Ok(false);
        };
        self.fetch(page, FetchMode::Append).await?;
        Ok(true)
    }

    /// Update a single draft field.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.state.draft.set(field, value);
    }

    /// Start editing a listed user. Returns `false` if it is not loaded.
    pub fn edit(&mut self, id: UserId) -> bool {
        let Some(user) = self.state.users.get(id) else {
            return false;
        };
        self.state.draft = Draft::from_user(user);
        self.state.editing = true;
        true
    }

    /// Drop the draft and leave edit mode.
    pub fn cancel_edit(&mut self) {
        self.state.draft = Draft::default();
        self.state.editing = false;
    }

    /// Validate the draft and create or update the user, then reload.
    ///
    /// On a failed save the draft is kept so it can be resubmitted.
    pub async fn submit(&mut self) -> Result<(), SessionError> {
        if let Err(e) = validate::validate(&self.state.draft) {
            return Err(self.record(SessionError::ValidationFailed(e)));
        }
        self.state.error = None;

        let payload = self.state.draft.to_payload();
        let saved = match (self.state.editing, self.state.draft.id) {
            (true, Some(id)) => self.api.update(id, &payload).await,
            _ => self.api.create(&payload).await,
        };
        match saved {
            Ok(user) => tracing::debug!(id = user.id, "saved user"),
            Err(e) => return Err(self.record(SessionError::SaveFailed(e))),
        }

        self.cancel_edit();
        self.refresh().await
    }

    /// Delete a user, then reload. On failure the list is left as is.
    pub async fn delete(&mut self, id: UserId) -> Result<(), SessionError> {
        if let Err(e) = self.api.delete(id).await {
            return Err(self.record(SessionError::DeleteFailed(e)));
        }
        self.refresh().await
    }

    /// Rewind to page 1 and replace the list.
    async fn refresh(&mut self) -> Result<(), SessionError> {
        let page = self.state.cursor.begin_reset();
        self.fetch(page, FetchMode::Reset).await
    }

    async fn fetch(&mut self, page: u32, mode: FetchMode) -> Result<(), SessionError> {
        match self.api.list(page, self.page_size).await {
            Ok(users) => {
                tracing::debug!(page, count = users.len(), ?mode, "fetched users");
                self.state.cursor.complete(users.len());
                match mode {
                    FetchMode::Reset => self.state.users.replace(users),
                    FetchMode::Append => self.state.users.append(users),
                }
                Ok(())
            }
            Err(e) => {
                self.state.cursor.fail();
                Err(self.record(SessionError::FetchFailed(e)))
            }
        }
    }

    /// Put the error on the banner, overwriting any previous message.
    fn record(&mut self, err: SessionError) -> SessionError {
        match std::error::Error::source(&err) {
            Some(cause) => tracing::debug!("{err}: {cause}"),
            None => tracing::debug!("{err}"),
        }
        self.state.error = Some(err.to_string());
        err
    }
}

impl std::fmt::Debug for UserSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserSession")
            .field("page_size", &self.page_size)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
