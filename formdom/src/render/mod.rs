//! Plain-text rendering of element trees.
//!
//! Produces one line per text node and per input. Input labels are padded to
//! a common display width so the values line up; password values are masked
//! and each annotation is listed beneath its input.

use crate::element::{Content, Element, InputKind};
use crate::text::{display_width, mask, pad_to_width, truncate_to_width};

/// Values wider than this are truncated with an ellipsis.
const MAX_VALUE_WIDTH: usize = 40;

pub fn to_text(root: &Element) -> String {
    let label_width = widest_label(root);
    let mut lines = Vec::new();
    render_into(root, label_width, &mut lines);
    lines.join("\n")
}

fn widest_label(element: &Element) -> usize {
    let own = if element.is_input() {
        display_width(caption(element))
    } else {
        0
    };

    element
        .child_elements()
        .iter()
        .map(widest_label)
        .fold(own, usize::max)
}

/// Inputs without a label are captioned by their id.
fn caption(element: &Element) -> &str {
    element.label.as_deref().unwrap_or(&element.id)
}

fn render_into(element: &Element, label_width: usize, lines: &mut Vec<String>) {
    match &element.content {
        Content::None => {}
        Content::Text(text) => lines.extend(text.lines().map(str::to_string)),
        Content::Children(children) => {
            for child in children {
                render_into(child, label_width, lines);
            }
        }
        Content::Input { value, kind, .. } => {
            let shown = match kind {
                InputKind::Text => truncate_to_width(value, MAX_VALUE_WIDTH),
                InputKind::Password => truncate_to_width(&mask(value), MAX_VALUE_WIDTH),
            };
            lines.push(format!("{} [{shown}]", pad_to_width(caption(element), label_width)));
            lines.extend(
                element
                    .annotations
                    .iter()
                    .map(|message| format!("{} ! {message}", " ".repeat(label_width))),
            );
        }
    }
}
