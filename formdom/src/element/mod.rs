mod content;
mod node;

pub use content::{Content, InputHandler, InputKind};
pub use node::Element;

use crate::event::Event;

/// Error returned when an event cannot be delivered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("no element with id '{0}'")]
    UnknownTarget(String),
    #[error("element '{0}' does not accept input")]
    NotInteractive(String),
}

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Deliver an event to the input element it targets.
///
/// The element's handler is the update callback embedded by whoever built
/// the tree; invoking it is the only effect of dispatching.
pub fn dispatch(root: &Element, event: &Event) -> Result<(), DispatchError> {
    let target = event.target();
    let element =
        find_element(root, target).ok_or_else(|| DispatchError::UnknownTarget(target.to_string()))?;

    match &element.content {
        Content::Input {
            handler: Some(handler),
            ..
        } => {
            log::debug!("dispatch {} -> {}", event.kind(), target);
            handler(event);
            Ok(())
        }
        _ => {
            log::warn!("dropped {} event for non-input element {}", event.kind(), target);
            Err(DispatchError::NotInteractive(target.to_string()))
        }
    }
}
