pub mod element;
pub mod event;
pub mod render;
pub mod text;

pub use element::{dispatch, find_element, Content, DispatchError, Element, InputHandler, InputKind};
pub use event::Event;
pub use render::to_text;
