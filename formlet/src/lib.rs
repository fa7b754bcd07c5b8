pub mod builder;
pub mod error;
pub mod host;
pub mod inputs;
pub mod pipeline;
pub mod state;
pub mod validated;
pub mod validator;

pub use builder::{
    Annotate, Annotation, Built, Callback, Fields, FormBuilder, Lens, Render, Stamp, with_value,
};
pub use error::ValidationError;
pub use formlet_derive::Lenses;
pub use host::{FormHost, Frame};
pub use inputs::{TextInput, text_input};
pub use state::State;
pub use validated::Validated;
pub use validator::{Rule, is_valid_email, must_equal, must_equal_by, non_empty};

pub mod prelude {
    pub use crate::builder::{Annotate, Annotation, Built, Fields, FormBuilder, Lens, with_value};
    pub use crate::error::ValidationError;
    pub use crate::host::{FormHost, Frame};
    pub use crate::inputs::{TextInput, text_input};
    pub use crate::validated::Validated;
    pub use crate::validator::{Rule, is_valid_email, must_equal, non_empty};
    pub use crate::{Lenses, sequence};
}
