//! src/domain/user_name.rs

use crate::domain::ValidationError;
use crate::outcome::Outcome;
use unicode_segmentation::UnicodeSegmentation;

/// Names shorter than this many graphemes are rejected. Graphemes, not
/// UTF-16 units: `"😀".repeat(5)` and `"e\u{301}".repeat(5)` count as 5.
pub const MIN_NAME_LENGTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    /// Returns a `UserName` if the input has at least `MIN_NAME_LENGTH`
    /// user-perceived characters.
    pub fn parse(s: String) -> Outcome<ValidationError, UserName> {
        // A grapheme is defined by the Unicode standard as a "user-perceived"
        // character: `å` is a single grapheme, but it is composed of two
        // characters (`a` and `̊`).
        if s.graphemes(true).count() < MIN_NAME_LENGTH {
            tracing::debug!(user_name = %s, "Rejected user name");
            return Outcome::failure(ValidationError::NameTooShort);
        }
        Outcome::success(Self(s))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
