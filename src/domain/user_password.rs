//! src/domain/user_password.rs

use crate::domain::ValidationError;
use crate::outcome::Outcome;
use secrecy::{ExposeSecret, Secret};

pub const REQUIRED_SYMBOL: char = '!';

#[derive(Debug, Clone)]
pub struct UserPassword(Secret<String>);

impl UserPassword {
    /// Returns a `UserPassword` if the input contains `REQUIRED_SYMBOL`.
    pub fn parse(s: Secret<String>) -> Outcome<ValidationError, UserPassword> {
        if !s.expose_secret().contains(REQUIRED_SYMBOL) {
            tracing::debug!("Rejected user password");
            return Outcome::failure(ValidationError::PasswordMissingSymbol);
        }
        Outcome::success(Self(s))
    }
}

impl ExposeSecret<String> for UserPassword {
    fn expose_secret(&self) -> &String {
        self.0.expose_secret()
    }
}

impl PartialEq for UserPassword {
    fn eq(&self, other: &Self) -> bool {
        self.expose_secret() == other.expose_secret()
    }
}
