use std::rc::Rc;

use crate::event::Event;

/// Callback invoked when an input element receives an event.
pub type InputHandler = Rc<dyn Fn(&Event)>;

/// How an input displays its value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputKind {
    #[default]
    Text,
    /// Value is masked when rendered
    Password,
}

#[derive(Default, Clone)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
    /// Editable text field. `handler` is absent until one is attached.
    Input {
        value: String,
        kind: InputKind,
        handler: Option<InputHandler>,
    },
}

impl std::fmt::Debug for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Text(s) => write!(f, "Text({s:?})"),
            Self::Children(c) => write!(f, "Children({c:?})"),
            Self::Input {
                value,
                kind,
                handler,
            } => {
                let handler = if handler.is_some() { "handler" } else { "no handler" };
                write!(f, "Input({value:?}, {kind:?}, {handler})")
            }
        }
    }
}
