//! JSON output renderer.
//!
//! Outputs `{"users": [...], "page": n, "has_more": b, "error": s|null}`.

use crate::output::SessionRenderer;
use crate::session::SessionState;

/// JSON output renderer.
pub struct JsonRenderer;

impl SessionRenderer for JsonRenderer {
    fn render(&self, state: &SessionState) -> String {
        let output = serde_json::json!({
            "users": state.users.as_slice(),
            "page": state.cursor.page(),
            "has_more": state.cursor.has_more(),
            "error": state.error,
        });

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}
