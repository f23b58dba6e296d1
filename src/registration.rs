//! src/registration.rs
//!
//! Four ways of turning raw registration input into a [`User`]. They all
//! validate name, email and password in this order and stop at the first
//! rejected field, so for the same input they return the same result.

use crate::domain::{User, UserEmail, UserName, UserPassword, ValidationError};
use crate::outcome::Outcome;
use secrecy::Secret;

pub type UserOutcome = Outcome<ValidationError, User>;

/// Result of [`create_user_nested`]: one layer of `Outcome` per validator.
pub type NestedUserOutcome =
    Outcome<ValidationError, Outcome<ValidationError, Outcome<ValidationError, User>>>;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: Secret<String>,
}

impl RegistrationForm {
    pub fn new(name: &str, email: &str, password: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            password: Secret::new(password.to_string()),
        }
    }
}

impl TryFrom<RegistrationForm> for User {
    type Error = ValidationError;

    fn try_from(value: RegistrationForm) -> Result<Self, Self::Error> {
        let name = UserName::parse(value.name).into_result()?;
        let email = UserEmail::parse(value.email).into_result()?;
        let password = UserPassword::parse(value.password).into_result()?;
        Ok(Self::new(name, email, password))
    }
}

#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CompositionStyle {
    Branching,
    Nested,
    Chained,
    Composed,
}

impl CompositionStyle {
    pub const ALL: [CompositionStyle; 4] = [
        CompositionStyle::Branching,
        CompositionStyle::Nested,
        CompositionStyle::Chained,
        CompositionStyle::Composed,
    ];
}

impl std::fmt::Display for CompositionStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CompositionStyle::Branching => "branching",
            CompositionStyle::Nested => "nested",
            CompositionStyle::Chained => "chained",
            CompositionStyle::Composed => "composed",
        };
        f.write_str(s)
    }
}

/// Run the registration pipeline written in `style`. Nested results are
/// flattened so every style hands back the same shape.
#[tracing::instrument(
    name = "Creating a new user.",
    skip(form),
    fields(
        user_name = %form.name,
        user_email = %form.email
    )
)]
pub fn create_user(style: CompositionStyle, form: RegistrationForm) -> UserOutcome {
    let RegistrationForm {
        name,
        email,
        password,
    } = form;
    let outcome = match style {
        CompositionStyle::Branching => create_user_branching(name, email, password),
        CompositionStyle::Nested => create_user_nested(name, email, password)
            .flatten()
            .flatten(),
        CompositionStyle::Chained => create_user_chained(name, email, password),
        CompositionStyle::Composed => create_user_composed(name, email, password),
    };
    if let Outcome::Failure(e) = &outcome {
        tracing::info!(error.message = %e, "Registration rejected");
    }
    outcome
}

/// One printable line per run: the record on success, the validator's
/// message on failure.
pub fn report_line(style: CompositionStyle, outcome: &UserOutcome) -> String {
    match outcome {
        Outcome::Success(user) => format!("{}: Success({:?})", style, user),
        Outcome::Failure(e) => format!("{}: Failure({})", style, e),
    }
}

/// Check each field in turn and bail out on the first failure.
pub fn create_user_branching(
    name: String,
    email: String,
    password: Secret<String>,
) -> UserOutcome {
    let user_name = match UserName::parse(name) {
        Outcome::Success(user_name) => user_name,
        Outcome::Failure(e) => return Outcome::failure(e),
    };

    let user_email = match UserEmail::parse(email) {
        Outcome::Success(user_email) => user_email,
        Outcome::Failure(e) => return Outcome::failure(e),
    };

    let user_password = match UserPassword::parse(password) {
        Outcome::Success(user_password) => user_password,
        Outcome::Failure(e) => return Outcome::failure(e),
    };

    Outcome::success(User::new(user_name, user_email, user_password))
}

/// Every later step depends on the earlier ones, so plain `map` piles up
/// one `Outcome` per field. Use [`Outcome::flatten`] twice to get a
/// [`UserOutcome`].
pub fn create_user_nested(
    name: String,
    email: String,
    password: Secret<String>,
) -> NestedUserOutcome {
    UserName::parse(name).map(|user_name| {
        UserEmail::parse(email).map(|user_email| {
            UserPassword::parse(password)
                .map(|user_password| User::new(user_name, user_email, user_password))
        })
    })
}

/// A flat sequence of `chain` calls, carrying the fields validated so far.
pub fn create_user_chained(
    name: String,
    email: String,
    password: Secret<String>,
) -> UserOutcome {
    let user_name = UserName::parse(name);
    let with_email =
        user_name.chain(|user_name| UserEmail::parse(email).map(|email| (user_name, email)));
    let with_password = with_email.chain(|(user_name, user_email)| {
        UserPassword::parse(password).map(|password| (user_name, user_email, password))
    });
    with_password.map(|(user_name, user_email, user_password)| {
        User::new(user_name, user_email, user_password)
    })
}

/// The whole pipeline as one expression.
pub fn create_user_composed(
    name: String,
    email: String,
    password: Secret<String>,
) -> UserOutcome {
    UserName::parse(name).chain(|user_name| {
        UserEmail::parse(email).chain(|user_email| {
            UserPassword::parse(password)
                .map(|user_password| User::new(user_name, user_email, user_password))
        })
    })
}
