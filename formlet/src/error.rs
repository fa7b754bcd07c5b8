use serde::{Deserialize, Serialize};

/// Reason a value was rejected.
///
/// Shared by the field combinators and the standalone pipeline.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error,
)]
pub enum ValidationError {
    #[error("field must not be empty")]
    EmptyField,
    #[error("value is too short")]
    TooShort,
    #[error("value is too long")]
    TooLong,
    #[error("value must contain a special character")]
    NoSpecialChar,
    #[error("value is not a valid email address")]
    InvalidEmail,
    #[error("passwords do not match")]
    PasswordsMismatch,
    #[error("value does not match the expected format")]
    PatternMismatch,
}
