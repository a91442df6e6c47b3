//! Draft validation.
//!
//! Reports the first violated rule only; callers decide how to surface it.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::Draft;

/// ASCII `local@domain.tld`, with a 2–4 character top-level label.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]{2,4}$").unwrap()
});

/// Why a draft was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmail,
}

/// Check that every field is filled in and the email looks like an address.
pub fn validate(draft: &Draft) -> Result<(), ValidationError> {
    let required = [
        &draft.first_name,
        &draft.last_name,
        &draft.email,
        &draft.department,
    ];
    if required.iter().any(|value| value.is_empty()) {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(&draft.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Returns `true` if `email` matches the accepted address shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
