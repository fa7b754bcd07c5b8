//! Property tests for the field rules and the standalone pipeline.

use formlet::pipeline::{validate_email, validate_password};
use formlet::{Validated, ValidationError, non_empty};
use proptest::prelude::*;

const SPECIAL_CHARS: &str = "!@#$%^&*)(+=._-";

proptest! {
    #[test]
    fn non_empty_rejects_iff_blank(s in ".*") {
        prop_assert_eq!(!non_empty("Field").accepts(&s), s.trim().is_empty());
    }

    #[test]
    fn email_in_window_with_at_is_wrapped_unchanged(s in ".{0,15}@.{0,14}") {
        prop_assume!(s.chars().count() >= 6);
        let email = validate_email(&s);
        prop_assert!(email.is_ok());
        let email = email.unwrap();
        prop_assert_eq!(email.as_str(), s.as_str());
    }

    #[test]
    fn password_lacks_special_char_iff_reported(s in ".{0,30}") {
        let has_special = s.chars().any(|c| SPECIAL_CHARS.contains(c));
        let reported = match validate_password(&s) {
            Ok(_) => false,
            Err(errors) => errors.iter().any(|e| *e == ValidationError::NoSpecialChar),
        };
        prop_assert_eq!(reported, !has_special);
    }

    #[test]
    fn repeated_edit_is_idempotent(start in ".{0,10}", value in ".{0,10}") {
        let field: Validated = Validated::with_value(start);
        let once = field.clone().edit(value.clone());
        let twice = once.clone().edit(value);
        prop_assert_eq!(once, twice);
    }
}
