//! Leaf field builders.

use std::rc::Rc;

use formdom::{Element, Event, InputKind};

use crate::builder::{Built, Callback, FormBuilder};
use crate::validated::Validated;

/// Configuration of a single-line input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    id: String,
    label: String,
    kind: InputKind,
}

impl TextInput {
    /// Plain text input. The element id defaults to a slug of the label.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            id: slug(&label),
            label,
            kind: InputKind::Text,
        }
    }

    /// Masked input.
    pub fn password(label: impl Into<String>) -> Self {
        Self {
            kind: InputKind::Password,
            ..Self::new(label)
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn element_id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

fn slug(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// A text input over one [`Validated`] field.
///
/// Always accepts the raw value; guard it with
/// [`validated`](FormBuilder::validated). Edits set `modified` and clear
/// `accepted`, blur and focus toggle `blurred`. Settling stamps the raw value
/// as accepted before any validator gets a say.
pub fn text_input(config: TextInput) -> FormBuilder<Validated<String>, String, Element> {
    let config = Rc::new(config);
    FormBuilder::new(move |input: &Validated<String>| {
        let config = Rc::clone(&config);
        let snapshot = input.clone();
        Built::new(
            Some(input.value.clone()),
            move |on_change: Callback<Validated<String>>| {
                let current = snapshot.clone();
                Element::input(config.kind, snapshot.value.clone())
                    .id(config.id.clone())
                    .label(config.label.clone())
                    .on_event(move |event| {
                        let next = match event {
                            Event::Change { value, .. } => current.clone().edit(value.clone()),
                            Event::Blur { .. } => current.clone().blur(),
                            Event::Focus { .. } => current.clone().focus(),
                        };
                        on_change(next);
                    })
            },
        )
        .stamped(Validated::accept_raw)
    })
}
