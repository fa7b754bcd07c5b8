use nonempty::NonEmpty;
use serde::{Deserialize, Serialize};

use super::Errors;
use crate::error::ValidationError;

/// Inclusive character-count window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBounds {
    pub min: usize,
    pub max: usize,
}

impl LengthBounds {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Empty input fails as empty; the bounds are only checked otherwise.
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        let len = value.chars().count();
        if len == 0 {
            Err(ValidationError::EmptyField)
        } else if len < self.min {
            Err(ValidationError::TooShort)
        } else if len > self.max {
            Err(ValidationError::TooLong)
        } else {
            Ok(())
        }
    }
}

/// Numeric bounds and character classes used by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub email: LengthBounds,
    pub password: LengthBounds,
    /// A password must contain at least one of these.
    pub special_chars: String,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            email: LengthBounds::new(6, 30),
            password: LengthBounds::new(4, 24),
            special_chars: "!@#$%^&*)(+=._-".to_string(),
        }
    }
}

impl Rules {
    pub(crate) fn email_checks(&self, value: &str) -> [Result<(), ValidationError>; 2] {
        [
            self.email.check(value),
            require(value.contains('@'), ValidationError::InvalidEmail),
        ]
    }

    pub(crate) fn password_checks(&self, value: &str) -> [Result<(), ValidationError>; 2] {
        [
            self.password.check(value),
            require(self.has_special_char(value), ValidationError::NoSpecialChar),
        ]
    }

    pub fn has_special_char(&self, value: &str) -> bool {
        value.chars().any(|c| self.special_chars.contains(c))
    }
}

fn require(condition: bool, error: ValidationError) -> Result<(), ValidationError> {
    if condition { Ok(()) } else { Err(error) }
}

/// Run every check, keeping all failures.
pub(crate) fn collect(
    checks: impl IntoIterator<Item = Result<(), ValidationError>>,
) -> Result<(), Errors> {
    let failures: Vec<ValidationError> = checks.into_iter().filter_map(Result::err).collect();
    match NonEmpty::from_vec(failures) {
        Some(errors) => Err(errors),
        None => Ok(()),
    }
}

/// Pair two outcomes, merging failures from both sides, left first.
pub(crate) fn both<A, B>(left: Result<A, Errors>, right: Result<B, Errors>) -> Result<(A, B), Errors> {
    match (left, right) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Err(errors), Ok(_)) | (Ok(_), Err(errors)) => Err(errors),
        (Err(mut errors), Err(more)) => {
            errors.tail.push(more.head);
            errors.tail.extend(more.tail);
            Err(errors)
        }
    }
}
