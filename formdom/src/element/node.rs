use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{Content, InputKind};
use crate::event::Event;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A node in a rendered form fragment.
///
/// Elements are plain descriptions: layout and styling are left to whatever
/// draws them. Input elements carry the update callback that feeds user
/// interaction back into the form.
#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,

    // Content
    pub content: Content,

    /// Caption shown next to an input
    pub label: Option<String>,

    /// Messages attached by validation, in the order they were attached.
    pub annotations: Vec<String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            label: None,
            annotations: Vec::new(),
        }
    }
}

impl Element {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    /// Container stacking its children top to bottom.
    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            ..Default::default()
        }
    }

    /// Create a text input element.
    pub fn text_input(value: impl Into<String>) -> Self {
        Self::input(InputKind::Text, value)
    }

    /// Create a masked input element.
    pub fn password_input(value: impl Into<String>) -> Self {
        Self::input(InputKind::Password, value)
    }

    pub fn input(kind: InputKind, value: impl Into<String>) -> Self {
        Self {
            id: generate_id("input"),
            content: Content::Input {
                value: value.into(),
                kind,
                handler: None,
            },
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Attach a validation message.
    pub fn annotation(mut self, message: impl Into<String>) -> Self {
        self.annotations.push(message.into());
        self
    }

    /// Attach the event handler of an input element. No effect on other content.
    pub fn on_event(mut self, handler: impl Fn(&Event) + 'static) -> Self {
        if let Content::Input { handler: slot, .. } = &mut self.content {
            *slot = Some(Rc::new(handler));
        }
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    // Accessors
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Current value of an input element.
    pub fn value(&self) -> Option<&str> {
        match &self.content {
            Content::Input { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self.content, Content::Input { .. })
    }
}
