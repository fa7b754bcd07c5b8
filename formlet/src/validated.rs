use serde::{Deserialize, Serialize};

/// Raw input of a single field plus its interaction flags.
///
/// `accepted` holds the typed value once every validator guarding the field
/// has passed on `value`. Edits clear it; settling the form state against its
/// builder fills it back in for the fields that pass. Every transition
/// returns a new copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validated<T = String> {
    pub value: String,
    pub modified: bool,
    pub blurred: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted: Option<T>,
}

impl<T> Validated<T> {
    /// Untouched, empty field.
    pub fn empty() -> Self {
        Self {
            value: String::new(),
            modified: false,
            blurred: false,
            accepted: None,
        }
    }

    /// Untouched field pre-filled with `value`.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::empty()
        }
    }

    /// Whether the user has interacted with the field. Errors stay hidden until then.
    pub fn is_touched(&self) -> bool {
        self.modified || self.blurred
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted.is_some()
    }

    /// The user edited the value.
    pub fn edit(self, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            modified: true,
            accepted: None,
            ..self
        }
    }

    /// The field lost focus.
    pub fn blur(self) -> Self {
        Self {
            blurred: true,
            ..self
        }
    }

    /// The field regained focus.
    pub fn focus(self) -> Self {
        Self {
            blurred: false,
            ..self
        }
    }

    pub fn accept(self, value: T) -> Self {
        Self {
            accepted: Some(value),
            ..self
        }
    }

    pub fn reject(self) -> Self {
        Self {
            accepted: None,
            ..self
        }
    }
}

impl Validated<String> {
    /// Accept the raw value as-is. Leaf inputs start every update this way.
    pub fn accept_raw(self) -> Self {
        let value = self.value.clone();
        self.accept(value)
    }
}
