//! The registration form: email, password and a confirmation that must
//! match the live password.

use formdom::Element;
use formlet::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Lenses)]
pub struct RegistrationFormData {
    pub email: Validated,
    pub password: Validated,
    pub password_confirmation: Validated,
}

/// What the form produces once every field accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

pub type RegistrationBuilder = FormBuilder<RegistrationFormData, Registration, Fields<Element>>;

fn wrapped(ui: Element) -> Element {
    Element::col().child(ui)
}

pub fn registration_form() -> RegistrationBuilder {
    sequence!(Registration {
        email: text_input(TextInput::new("Email"))
            .validated(non_empty("Email"))
            .validated(is_valid_email())
            .focus(RegistrationFormData::email_lens())
            .map_ui(wrapped),
        password: text_input(TextInput::password("Password"))
            .validated(non_empty("Password"))
            .focus(RegistrationFormData::password_lens())
            .map_ui(wrapped),
        password_confirmation: with_value(|form: &RegistrationFormData| {
            text_input(TextInput::password("Confirm password").id("password_confirmation"))
                .validated(non_empty("Password"))
                .validated(must_equal(form.password.value.clone(), "Passwords must match"))
                .focus(RegistrationFormData::password_confirmation_lens())
                .map_ui(wrapped)
        }),
    })
}

/// Full page for one render: heading, fields, then the accepted record as
/// JSON or a blanket notice while the form is invalid.
pub fn view(frame: Frame<Registration, Fields<Element>>) -> Element {
    let status = match &frame.result {
        Some(registration) => serde_json::to_string_pretty(registration)
            .unwrap_or_else(|e| format!("Unprintable form: {e}")),
        None => "Invalid form".to_string(),
    };

    Element::col()
        .id("registration")
        .child(Element::text("Registration form"))
        .child(frame.ui.into())
        .child(Element::text(status).id("status"))
}
