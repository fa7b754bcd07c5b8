//! Line-oriented driver for the registration form.
//!
//! Each command turns into a DOM event dispatched at the rendered tree, the
//! same path a real input would take, and the page is re-rendered after it.

use std::str::FromStr;

use formdom::{DispatchError, Element, Event, dispatch, to_text};
use formlet::pipeline::{RegistrationInput, Rules, validate_form_with};
use formlet::{Fields, FormHost};
use thiserror::Error;

use crate::form::{Registration, RegistrationFormData, registration_form, view};

pub const FIELDS: [&str; 3] = ["email", "password", "password_confirmation"];

pub const HELP: &str = "\
Commands:
  set <field> <value>   type a value into a field
  focus <field>         focus a field
  blur <field>          leave a field
  reset                 clear the form
  show                  print the form
  check                 run the standalone email/password validation
  help                  print this message
  quit                  exit
Fields: email, password, password_confirmation";

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unrecognised command '{0}', try 'help'")]
    Parse(String),
    #[error("unknown field '{0}', expected one of: email, password, password_confirmation")]
    UnknownField(String),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { field: String, value: String },
    Focus(String),
    Blur(String),
    Reset,
    Show,
    Check,
    Help,
    Quit,
}

fn known_field(name: &str) -> Result<String, CommandError> {
    if FIELDS.contains(&name) {
        Ok(name.to_string())
    } else {
        Err(CommandError::UnknownField(name.to_string()))
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (verb, rest) = line.split_once(' ').unwrap_or((line.trim_end(), ""));

        match verb {
            // The value keeps everything after the field name, spaces included.
            "set" => {
                let (field, value) = rest.split_once(' ').unwrap_or((rest.trim_end(), ""));
                Ok(Command::Set {
                    field: known_field(field)?,
                    value: value.to_string(),
                })
            }
            "focus" => Ok(Command::Focus(known_field(rest.trim())?)),
            "blur" => Ok(Command::Blur(known_field(rest.trim())?)),
            "reset" => Ok(Command::Reset),
            "show" | "" => Ok(Command::Show),
            "check" => Ok(Command::Check),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Parse(line.trim_end().to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Output(String),
    Quit,
}

pub struct Session {
    host: FormHost<RegistrationFormData, Registration, Fields<Element>>,
    rules: Rules,
}

impl Session {
    pub fn new(rules: Rules) -> Self {
        Self {
            host: FormHost::new(registration_form(), RegistrationFormData::default()),
            rules,
        }
    }

    pub fn host(&self) -> &FormHost<RegistrationFormData, Registration, Fields<Element>> {
        &self.host
    }

    /// The current page as text.
    pub fn render(&self) -> String {
        to_text(&view(self.host.render()))
    }

    pub fn execute_line(&self, line: &str) -> Result<Outcome, CommandError> {
        self.execute(line.parse()?)
    }

    pub fn execute(&self, command: Command) -> Result<Outcome, CommandError> {
        log::debug!("executing {command:?}");

        match command {
            Command::Set { field, value } => self.send(Event::change(field, value))?,
            Command::Focus(field) => self.send(Event::focus(field))?,
            Command::Blur(field) => self.send(Event::blur(field))?,
            Command::Reset => self.host.reset(),
            Command::Show => {}
            Command::Check => return Ok(Outcome::Output(self.check())),
            Command::Help => return Ok(Outcome::Output(HELP.to_string())),
            Command::Quit => return Ok(Outcome::Quit),
        }

        Ok(Outcome::Output(self.render()))
    }

    /// Run the standalone pipeline over the current email and password,
    /// reporting every error at once.
    pub fn check(&self) -> String {
        let state = self.host.state();
        let input = RegistrationInput::new(state.email.value, state.password.value);

        match validate_form_with(&self.rules, &input) {
            Ok(valid) => format!("Valid registration for {}", valid.email),
            Err(errors) => {
                let mut report = String::from("Invalid registration:");
                for error in errors.iter() {
                    report.push_str("\n  - ");
                    report.push_str(&error.to_string());
                }
                report
            }
        }
    }

    fn send(&self, event: Event) -> Result<(), CommandError> {
        let root: Element = self.host.render().ui.into();
        dispatch(&root, &event)?;
        Ok(())
    }
}
