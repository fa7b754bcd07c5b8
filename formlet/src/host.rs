//! Controlled-state container for a form.

use std::rc::Rc;

use crate::builder::{Annotation, Built, Callback, FormBuilder};
use crate::state::State;

/// One render of a form: the fragment plus what the form concluded.
#[derive(Debug, Clone)]
pub struct Frame<T, U> {
    pub ui: U,
    pub result: Option<T>,
    pub annotations: Vec<Annotation>,
}

impl<T, U> Frame<T, U> {
    pub fn is_valid(&self) -> bool {
        self.result.is_some()
    }

    /// Annotations the user should currently see.
    pub fn visible_annotations(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter().filter(|annotation| annotation.visible)
    }
}

/// Owns the state of a form and re-evaluates the whole builder against it.
///
/// The update callback wired into each render replaces the state wholesale,
/// settled against the form so every field's `accepted` slot agrees with the
/// new snapshot. The next [`render`](Self::render) sees that snapshot.
/// Nothing is cached between renders.
pub struct FormHost<S, T, U> {
    form: FormBuilder<S, T, U>,
    state: State<S>,
    initial: S,
}

impl<S: Clone + 'static, T: 'static, U: 'static> FormHost<S, T, U> {
    pub fn new(form: FormBuilder<S, T, U>, initial: S) -> Self {
        let initial = form.settle(initial);
        Self {
            form,
            state: State::new(initial.clone()),
            initial,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> S {
        self.state.get()
    }

    /// Replace the state, as an update callback would.
    pub fn set_state(&self, next: S) {
        self.state.set(self.form.settle(next));
    }

    /// Evaluate the form against the current state without rendering.
    pub fn evaluate(&self) -> Built<S, T, U> {
        self.form.build(&self.state.get())
    }

    pub fn render(&self) -> Frame<T, U> {
        let built = self.evaluate();
        self.state.clear_dirty();

        let state = self.state.clone();
        let form = self.form.clone();
        let on_change: Callback<S> = Rc::new(move |next: S| state.set(form.settle(next)));
        let ui = built.render(on_change);
        let (result, annotations, _, _) = built.into_parts();

        log::debug!(
            "form evaluated: {}, {} annotation(s)",
            if result.is_some() { "valid" } else { "invalid" },
            annotations.len()
        );

        Frame {
            ui,
            result,
            annotations,
        }
    }

    pub fn result(&self) -> Option<T> {
        self.evaluate().result
    }

    pub fn annotations(&self) -> Vec<Annotation> {
        self.evaluate().annotations
    }

    /// Back to the state the host was created with.
    pub fn reset(&self) {
        self.state.set(self.initial.clone());
    }

    /// Whether the state changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }
}
