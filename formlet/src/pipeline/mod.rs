//! Standalone validation of a plain registration record.
//!
//! Independent of the form builder: takes raw strings, runs every rule of
//! every field, and returns either all failures in field then rule order or
//! the branded values.
//!
//! ```ignore
//! match validate_form(&RegistrationInput::new("a@b.com", "Sup3r!")) {
//!     Ok(valid) => submit(valid.email, valid.password),
//!     Err(errors) => show(errors),
//! }
//! ```

mod branded;
mod rules;

pub use branded::{Email, Password};
pub use rules::{LengthBounds, Rules};

use nonempty::NonEmpty;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Every failure found, never empty.
pub type Errors = NonEmpty<ValidationError>;

/// Raw registration input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationInput {
    pub email: String,
    pub password: String,
}

impl RegistrationInput {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Registration input that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidRegistration {
    pub email: Email,
    pub password: Password,
}

pub fn validate_email(value: &str) -> Result<Email, Errors> {
    validate_email_with(&Rules::default(), value)
}

pub fn validate_email_with(rules: &Rules, value: &str) -> Result<Email, Errors> {
    rules::collect(rules.email_checks(value))?;
    Ok(Email::wrap(value))
}

pub fn validate_password(value: &str) -> Result<Password, Errors> {
    validate_password_with(&Rules::default(), value)
}

pub fn validate_password_with(rules: &Rules, value: &str) -> Result<Password, Errors> {
    rules::collect(rules.password_checks(value))?;
    Ok(Password::wrap(value))
}

/// Validate both fields with the default rules.
pub fn validate_form(input: &RegistrationInput) -> Result<ValidRegistration, Errors> {
    validate_form_with(&Rules::default(), input)
}

/// Validate both fields, accumulating the failures of each.
pub fn validate_form_with(
    rules: &Rules,
    input: &RegistrationInput,
) -> Result<ValidRegistration, Errors> {
    let outcome = rules::both(
        validate_email_with(rules, &input.email),
        validate_password_with(rules, &input.password),
    );

    match outcome {
        Ok((email, password)) => Ok(ValidRegistration { email, password }),
        Err(errors) => {
            log::debug!("registration rejected with {} error(s)", errors.len());
            Err(errors)
        }
    }
}
