//! src/domain/new_user.rs

use crate::domain::{UserEmail, UserName, UserPassword};

/// A user whose registration input passed every validator. The fields are
/// private and each field type can only be obtained through its `parse`
/// constructor, so holding a `User` means name, email and password were
/// all accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    name: UserName,
    email: UserEmail,
    password: UserPassword,
}

impl User {
    pub fn new(name: UserName, email: UserEmail, password: UserPassword) -> Self {
        Self {
            name,
            email,
            password,
        }
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &UserEmail {
        &self.email
    }

    pub fn password(&self) -> &UserPassword {
        &self.password
    }
}
