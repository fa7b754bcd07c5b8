use formlet::{Validated, ValidationError};
use formlet::pipeline::{LengthBounds, Rules};
use registration::config::{ConfigError, load_rules_from};
use registration::form::{RegistrationFormData, registration_form};
use registration::paths::{MAX_OLD_LOGS, rotate_logs_in};
use registration::session::{Command, CommandError, Outcome, Session};

fn rendered(session: &Session, line: &str) -> String {
    match session.execute_line(line) {
        Ok(Outcome::Output(text)) => text,
        other => panic!("unexpected outcome for '{line}': {other:?}"),
    }
}

fn filled(session: &Session) {
    session.execute_line("set email user@example.com").unwrap();
    session.execute_line("set password Abcdef1!").unwrap();
    session.execute_line("set password_confirmation Abcdef1!").unwrap();
}

fn errors_of(session: &Session, field: &str) -> Vec<ValidationError> {
    session
        .host()
        .annotations()
        .into_iter()
        .filter(|a| a.field.as_deref() == Some(field))
        .map(|a| a.error)
        .collect()
}

// ============================================================================
// Form
// ============================================================================

#[test]
fn test_initial_form_is_invalid_and_quiet() {
    let session = Session::new(Rules::default());
    let frame = session.host().render();

    assert!(frame.result.is_none());
    assert_eq!(frame.visible_annotations().count(), 0);

    let page = session.render();
    assert!(page.contains("Registration form"));
    assert!(page.contains("Invalid form"));
    assert!(!page.contains('!'));
}

#[test]
fn test_complete_form_produces_registration() {
    let session = Session::new(Rules::default());
    filled(&session);

    let registration = session.host().result().expect("form should accept");
    assert_eq!(registration.email, "user@example.com");
    assert_eq!(registration.password, "Abcdef1!");
    assert_eq!(registration.password_confirmation, "Abcdef1!");

    let page = rendered(&session, "show");
    assert!(page.contains("\"passwordConfirmation\": \"Abcdef1!\""));
    assert!(!page.contains("Invalid form"));
}

#[test]
fn test_confirmation_mismatch_blocks_result() {
    let session = Session::new(Rules::default());
    filled(&session);
    session
        .execute_line("set password_confirmation abc")
        .unwrap();

    assert!(session.host().result().is_none());
    assert_eq!(
        errors_of(&session, "password_confirmation"),
        vec![ValidationError::PasswordsMismatch]
    );
    assert!(errors_of(&session, "password").is_empty());

    let page = session.render();
    assert!(page.contains("! Passwords must match"));
    assert!(page.contains("Invalid form"));
}

#[test]
fn test_confirmation_follows_password_changes() {
    let session = Session::new(Rules::default());
    filled(&session);
    assert!(session.host().result().is_some());

    session.execute_line("set password Different1!").unwrap();
    assert!(session.host().result().is_none());
    assert_eq!(
        errors_of(&session, "password_confirmation"),
        vec![ValidationError::PasswordsMismatch]
    );

    session
        .execute_line("set password_confirmation Different1!")
        .unwrap();
    assert!(session.host().result().is_some());
}

#[test]
fn test_password_change_withdraws_confirmation_acceptance() {
    let session = Session::new(Rules::default());
    filled(&session);
    assert_eq!(
        session.host().state().password_confirmation.accepted.as_deref(),
        Some("Abcdef1!")
    );

    session.execute_line("set password Other1!").unwrap();
    let state = session.host().state();
    assert_eq!(state.password.accepted.as_deref(), Some("Other1!"));
    assert_eq!(state.password_confirmation.value, "Abcdef1!");
    assert_eq!(state.password_confirmation.accepted, None);

    session.execute_line("set password Abcdef1!").unwrap();
    assert_eq!(
        session.host().state().password_confirmation.accepted.as_deref(),
        Some("Abcdef1!")
    );
}

#[test]
fn test_empty_field_message_only() {
    let session = Session::new(Rules::default());
    session.execute_line("set email x").unwrap();
    session.execute_line("set email").unwrap();

    assert_eq!(errors_of(&session, "email"), vec![ValidationError::EmptyField]);
    assert!(session.render().contains("! Email must not be empty"));
}

#[test]
fn test_invalid_email_annotation() {
    let session = Session::new(Rules::default());
    let page = rendered(&session, "set email not-an-email");

    assert_eq!(errors_of(&session, "email"), vec![ValidationError::InvalidEmail]);
    assert!(page.contains("! Please enter a valid email"));
}

#[test]
fn test_blur_reveals_untouched_errors() {
    let session = Session::new(Rules::default());
    assert!(!session.render().contains("! Password must not be empty"));

    let page = rendered(&session, "blur password");
    assert!(page.contains("! Password must not be empty"));

    let page = rendered(&session, "focus password");
    assert!(!page.contains("! Password must not be empty"));
}

#[test]
fn test_fields_are_isolated() {
    let session = Session::new(Rules::default());
    session.execute_line("set email user@example.com").unwrap();

    let state = session.host().state();
    assert_eq!(state.email.value, "user@example.com");
    assert!(state.email.modified);
    assert_eq!(state.password, Validated::default());
    assert_eq!(state.password_confirmation, Validated::default());
}

#[test]
fn test_reset_clears_everything() {
    let session = Session::new(Rules::default());
    filled(&session);
    session.execute_line("reset").unwrap();

    assert_eq!(session.host().state(), RegistrationFormData::default());
    assert!(session.host().result().is_none());
}

#[test]
fn test_password_is_masked_in_page() {
    let session = Session::new(Rules::default());
    let page = rendered(&session, "set password hunter2");

    assert!(!page.contains("[hunter2]"));
    assert!(page.contains("[•••••••]"));
}

// ============================================================================
// Commands
// ============================================================================

#[test]
fn test_value_keeps_spaces() {
    let command: Command = "set email  a b ".parse().unwrap();
    assert_eq!(
        command,
        Command::Set {
            field: "email".to_string(),
            value: " a b ".to_string(),
        }
    );
}

#[test]
fn test_command_errors() {
    let session = Session::new(Rules::default());

    assert!(matches!(
        session.execute_line("jump"),
        Err(CommandError::Parse(_))
    ));
    assert!(matches!(
        session.execute_line("set username bob"),
        Err(CommandError::UnknownField(_))
    ));
    assert_eq!(session.execute_line("quit").unwrap(), Outcome::Quit);
}

#[test]
fn test_check_accumulates_errors() {
    let session = Session::new(Rules::default());
    session.execute_line("set password x").unwrap();

    let report = rendered(&session, "check");
    assert_eq!(report.lines().count(), 5);
    assert!(report.starts_with("Invalid registration:"));
}

#[test]
fn test_check_uses_configured_rules() {
    let rules = Rules {
        password: LengthBounds::new(1, 24),
        ..Rules::default()
    };
    let session = Session::new(rules);
    session.execute_line("set email user@example.com").unwrap();
    session.execute_line("set password x!").unwrap();

    assert_eq!(
        rendered(&session, "check"),
        "Valid registration for user@example.com"
    );
}

#[test]
fn test_form_is_reusable() {
    let form = registration_form();
    let empty = form.build(&RegistrationFormData::default());
    let again = form.build(&RegistrationFormData::default());

    assert_eq!(empty.result, again.result);
    assert_eq!(empty.annotations, again.annotations);
}

// ============================================================================
// Rules file
// ============================================================================

#[test]
fn test_missing_rules_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let rules = load_rules_from(&dir.path().join("rules.json")).unwrap();
    assert_eq!(rules, Rules::default());
}

#[test]
fn test_rules_file_overrides_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.json");
    std::fs::write(&path, r#"{ "password": { "min": 8, "max": 64 } }"#).unwrap();

    let rules = load_rules_from(&path).unwrap();
    assert_eq!(rules.password, LengthBounds::new(8, 64));
    assert_eq!(rules.email, Rules::default().email);
}

#[test]
fn test_malformed_rules_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        load_rules_from(&path),
        Err(ConfigError::Parse { .. })
    ));
}

// ============================================================================
// Log rotation
// ============================================================================

fn log_names(dir: &std::path::Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".log"))
        .collect()
}

#[test]
fn test_rotation_archives_latest_and_prunes() {
    let dir = tempfile::tempdir().unwrap();
    for i in 0..MAX_OLD_LOGS + 4 {
        std::fs::write(dir.path().join(format!("old-{i:02}.log")), "").unwrap();
    }
    std::fs::write(dir.path().join("latest.log"), "previous session").unwrap();
    std::fs::write(dir.path().join("notes.txt"), "").unwrap();

    let removed = rotate_logs_in(dir.path());

    let names = log_names(dir.path());
    assert_eq!(removed, 5);
    assert_eq!(names.len(), MAX_OLD_LOGS);
    assert!(!names.iter().any(|name| name == "latest.log"));
    assert!(dir.path().join("notes.txt").exists());
}

#[test]
fn test_rotation_keeps_few_archives() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("old.log"), "").unwrap();

    assert_eq!(rotate_logs_in(dir.path()), 0);
    assert_eq!(log_names(dir.path()), vec!["old.log".to_string()]);
}
