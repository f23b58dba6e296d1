//! src/domain/mod.rs

mod new_user;
mod user_email;
mod user_name;
mod user_password;

pub use new_user::User;
pub use user_email::UserEmail;
pub use user_name::UserName;
pub use user_password::UserPassword;

/// Validation error for registration data
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("UserName is too short!")]
    NameTooShort,
    #[error("Invalid UserEmail!")]
    InvalidEmail,
    #[error("UserPassword does not contain '!' !")]
    PasswordMissingSymbol,
}
