//! Terminal renderer: error banner, one card per user, paging footer.

use colored::Colorize;

use crate::output::SessionRenderer;
use crate::pagination::CursorState;
use crate::session::SessionState;

/// Terminal output renderer with colored, flowing text.
pub struct TerminalRenderer;

impl SessionRenderer for TerminalRenderer {
    fn render(&self, state: &SessionState) -> String {
        let mut output = String::new();

        if let Some(ref error) = state.error {
            output.push_str(&format!(" {} {}\n\n", "✖".red().bold(), error.red()));
        }

        let users = state.users.as_slice();
        if users.is_empty() {
            output.push_str(&format!("{}\n", "  No users.".dimmed()));
        }

        for user in users {
            output.push_str(&format!(
                " {} {}\n",
                user.name.bold(),
                format!("#{}", user.id).dimmed()
            ));
            output.push_str(&format!("   {} {}\n", "Email:".cyan(), user.email));
            output.push_str(&format!("   {} {}\n", "Department:".cyan(), user.department()));
            output.push('\n');
        }

        output.push_str(&format!("{}\n", "───────────────────────────────────".dimmed()));
        let cursor = &state.cursor;
        let footer = match cursor.state() {
            CursorState::Fresh => "Not loaded".to_string(),
            CursorState::Loading => "Loading...".to_string(),
            CursorState::Idle => format!("Load more available (page {})", cursor.page() + 1),
            CursorState::Exhausted => "No more users".to_string(),
        };
        output.push_str(&format!(
            " {} {} · {}\n",
            users.len().to_string().bold(),
            if users.len() == 1 { "user" } else { "users" },
            footer.dimmed(),
        ));

        output
    }
}
