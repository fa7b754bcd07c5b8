//! Acceptance rules for text fields and the combinator that applies them.
//!
//! Rules pipe in order:
//!
//! ```ignore
//! text_input(TextInput::new("Email"))
//!     .validated(non_empty("Email"))
//!     .validated(is_valid_email())
//! ```
//!
//! Every rule runs on the raw value, but once the field has been flagged
//! empty no further messages are attached to it.

use std::rc::Rc;

use email_address::EmailAddress;
use regex::Regex;

use crate::builder::{Annotate, Annotation, FormBuilder};
use crate::error::ValidationError;
use crate::validated::Validated;

/// Bounds for the structural email check.
const EMAIL_MIN_LEN: usize = 3;
const EMAIL_MAX_LEN: usize = 254;

/// A predicate over a field's raw value, with the reason reported on failure.
#[derive(Clone)]
pub struct Rule {
    check: Rc<dyn Fn(&str) -> bool>,
    error: ValidationError,
    message: String,
}

impl Rule {
    pub fn new(
        error: ValidationError,
        message: impl Into<String>,
        check: impl Fn(&str) -> bool + 'static,
    ) -> Self {
        Self {
            check: Rc::new(check),
            error,
            message: message.into(),
        }
    }

    pub fn accepts(&self, value: &str) -> bool {
        (self.check)(value)
    }

    pub fn error(&self) -> ValidationError {
        self.error
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("error", &self.error)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Rejects values that are empty after trimming.
pub fn non_empty(field_name: &str) -> Rule {
    Rule::new(
        ValidationError::EmptyField,
        format!("{field_name} must not be empty"),
        |v| !v.trim().is_empty(),
    )
}

/// Rejects values that don't look like an email address.
pub fn is_valid_email() -> Rule {
    Rule::new(
        ValidationError::InvalidEmail,
        "Please enter a valid email",
        |v| {
            let len = v.chars().count();
            (EMAIL_MIN_LEN..=EMAIL_MAX_LEN).contains(&len)
                && v.contains('@')
                && EmailAddress::is_valid(v)
        },
    )
}

/// Requires the value to equal `other`.
pub fn must_equal(other: impl Into<String>, message: impl Into<String>) -> Rule {
    must_equal_by(|a, b| a == b, other, message)
}

/// Requires the value to equal `other` under `eq`.
pub fn must_equal_by(
    eq: impl Fn(&str, &str) -> bool + 'static,
    other: impl Into<String>,
    message: impl Into<String>,
) -> Rule {
    let other = other.into();
    Rule::new(ValidationError::PasswordsMismatch, message, move |v| {
        eq(v, &other)
    })
}

/// Require minimum length (in characters).
pub fn min_length(min: usize, message: impl Into<String>) -> Rule {
    Rule::new(ValidationError::TooShort, message, move |v| {
        v.chars().count() >= min
    })
}

/// Require maximum length (in characters).
pub fn max_length(max: usize, message: impl Into<String>) -> Rule {
    Rule::new(ValidationError::TooLong, message, move |v| {
        v.chars().count() <= max
    })
}

/// Require at least one match of `pattern`.
pub fn pattern(pattern: Regex, message: impl Into<String>) -> Rule {
    Rule::new(ValidationError::PatternMismatch, message, move |v| {
        pattern.is_match(v)
    })
}

impl<T: 'static, U: Annotate + 'static> FormBuilder<Validated<String>, T, U> {
    /// Guard this field with `rule`.
    ///
    /// On failure the result is dropped, the field's `accepted` slot is
    /// cleared when the state is settled, and an annotation is attached,
    /// visible once the field has been touched.
    pub fn validated(self, rule: Rule) -> Self {
        let rule = Rc::new(rule);
        FormBuilder::new(move |input: &Validated<String>| {
            let built = self.build(input);
            if rule.accepts(&input.value) {
                return built;
            }

            log::trace!("rule {:?} rejected input", rule.error());
            let already_empty = built
                .annotations
                .iter()
                .any(|annotation| annotation.error == ValidationError::EmptyField);
            let built = built.reject().stamped(Validated::reject);
            if already_empty {
                return built;
            }

            built.annotated(Annotation::new(
                rule.error(),
                rule.message(),
                input.is_touched(),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_trims() {
        let rule = non_empty("Email");
        assert!(!rule.accepts(""));
        assert!(!rule.accepts("   \t"));
        assert!(rule.accepts(" a "));
        assert_eq!(rule.message(), "Email must not be empty");
    }

    #[test]
    fn test_is_valid_email() {
        let rule = is_valid_email();
        assert!(rule.accepts("a@b.com"));
        assert!(!rule.accepts("ab.com"));
        assert!(!rule.accepts("@"));
        assert!(!rule.accepts(""));
        assert_eq!(rule.error(), ValidationError::InvalidEmail);
    }

    #[test]
    fn test_must_equal() {
        let rule = must_equal("secret", "Passwords must match");
        assert!(rule.accepts("secret"));
        assert!(!rule.accepts("Secret"));
        assert_eq!(rule.error(), ValidationError::PasswordsMismatch);
    }

    #[test]
    fn test_must_equal_by_custom_equality() {
        let rule = must_equal_by(|a, b| a.eq_ignore_ascii_case(b), "Secret", "must match");
        assert!(rule.accepts("sEcReT"));
        assert!(!rule.accepts("other"));
    }

    #[test]
    fn test_settle_clears_rejected_fields() {
        let field = crate::inputs::text_input(crate::inputs::TextInput::new("Code"))
            .validated(non_empty("Code"))
            .validated(min_length(3, "Code is too short"));

        assert_eq!(field.settle(Validated::with_value("ab")).accepted, None);
        assert_eq!(
            field.settle(Validated::with_value("abc")).accepted.as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn test_length_rules() {
        assert!(min_length(3, "short").accepts("abc"));
        assert!(!min_length(3, "short").accepts("ab"));
        assert!(max_length(3, "long").accepts("日本語"));
        assert!(!max_length(3, "long").accepts("abcd"));
    }

    #[test]
    fn test_pattern_rule() {
        let digits = Regex::new(r"\d").unwrap();
        let rule = pattern(digits, "needs a digit");
        assert!(rule.accepts("abc1"));
        assert!(!rule.accepts("abc"));
    }
}
