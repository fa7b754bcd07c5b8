//! Tests for the Lenses derive.

use formlet::{Lenses, Validated};

#[derive(Debug, Clone, PartialEq, Lenses)]
struct Profile {
    name: String,
    age: u32,
    email: Validated,
}

#[derive(Debug, Clone, PartialEq, Lenses)]
struct Single {
    only: String,
}

fn profile() -> Profile {
    Profile {
        name: "Ada".to_string(),
        age: 36,
        email: Validated::with_value("ada@example.com"),
    }
}

#[test]
fn test_get() {
    let p = profile();
    assert_eq!(Profile::name_lens().get(&p), "Ada");
    assert_eq!(*Profile::age_lens().get(&p), 36);
    assert_eq!(Profile::email_lens().get(&p).value, "ada@example.com");
}

#[test]
fn test_set_keeps_siblings() {
    let updated = Profile::age_lens().set(profile(), 37);
    assert_eq!(
        updated,
        Profile {
            age: 37,
            ..profile()
        }
    );
}

#[test]
fn test_modify() {
    let updated = Profile::email_lens().modify(profile(), |email| email.blur());
    assert!(updated.email.blurred);
    assert_eq!(updated.name, "Ada");
}

#[test]
fn test_single_field_struct() {
    let single = Single::only_lens().set(
        Single {
            only: "a".to_string(),
        },
        "b".to_string(),
    );
    assert_eq!(single.only, "b");
}
