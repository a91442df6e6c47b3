//! Output renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use crate::session::SessionState;

/// Trait for rendering a session's list, banner and paging state.
pub trait SessionRenderer {
    /// Render the session to a string.
    fn render(&self, state: &SessionState) -> String;
}
