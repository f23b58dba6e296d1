//! src/domain/user_email.rs

use crate::domain::ValidationError;
use crate::outcome::Outcome;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^@]+@[^@]+").expect("Email shape pattern must compile"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEmail(String);

impl UserEmail {
    /// Accepts any input containing `[^@]+@[^@]+`, i.e. an `@` with at
    /// least one non-`@` character directly on each side.
    pub fn parse(s: String) -> Outcome<ValidationError, UserEmail> {
        if !EMAIL_SHAPE.is_match(&s) {
            tracing::debug!(user_email = %s, "Rejected user email");
            return Outcome::failure(ValidationError::InvalidEmail);
        }
        Outcome::success(Self(s))
    }
}

impl AsRef<str> for UserEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
