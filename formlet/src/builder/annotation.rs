use serde::Serialize;

use super::Built;
use crate::error::ValidationError;

/// A validation failure attached to a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// Key of the field within the enclosing record, once composed.
    pub field: Option<String>,
    pub error: ValidationError,
    pub message: String,
    /// False until the user has touched the field.
    pub visible: bool,
}

impl Annotation {
    pub fn new(error: ValidationError, message: impl Into<String>, visible: bool) -> Self {
        Self {
            field: None,
            error,
            message: message.into(),
            visible,
        }
    }
}

impl std::fmt::Display for Annotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{field}: {}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// UI fragments that can display a validation message.
pub trait Annotate {
    fn annotate(self, annotation: &Annotation) -> Self;
}

impl Annotate for formdom::Element {
    fn annotate(self, annotation: &Annotation) -> Self {
        self.annotation(annotation.message.clone())
    }
}

impl Annotate for String {
    fn annotate(mut self, annotation: &Annotation) -> Self {
        self.push_str("\n  ! ");
        self.push_str(&annotation.message);
        self
    }
}

impl<S: 'static, T, U: Annotate + 'static> Built<S, T, U> {
    /// Record `annotation`; visible ones are also drawn on the fragment.
    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation.clone());
        if !annotation.visible {
            return self;
        }
        self.map_ui(move |ui| ui.annotate(&annotation))
    }
}
