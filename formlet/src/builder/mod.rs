//! The form builder core.
//!
//! A [`FormBuilder`] is a pure function from form state to a [`Built`]: the
//! accepted value (present only if every field in the tree accepted its input)
//! together with a UI producer that renders the fragment once it is handed an
//! update callback.
//!
//! Builders are composed rather than configured:
//!
//! ```ignore
//! let form = sequence!(Login {
//!     email: text_input(TextInput::new("Email"))
//!         .validated(non_empty("Email"))
//!         .focus(LoginForm::email_lens()),
//!     password: text_input(TextInput::password("Password"))
//!         .validated(non_empty("Password"))
//!         .focus(LoginForm::password_lens()),
//! });
//! ```
//!
//! Acceptance is also written back into the state: [`FormBuilder::settle`]
//! evaluates the tree against a state and stamps every field's `accepted`
//! slot from that evaluation, so siblings read by [`with_value`] are taken
//! into account.

mod annotation;
mod fields;
mod lens;
mod sequence;

pub use annotation::{Annotate, Annotation};
pub use fields::Fields;
pub use lens::Lens;

use std::rc::Rc;

/// Update callback handed to a UI producer. Receives the next state.
pub type Callback<S> = Rc<dyn Fn(S)>;

/// Renders a UI fragment wired to the given update callback.
pub type Render<S, U> = Rc<dyn Fn(Callback<S>) -> U>;

/// Rewrites the acceptance bookkeeping of the state a [`Built`] was
/// evaluated against.
pub type Stamp<S> = Rc<dyn Fn(S) -> S>;

/// Outcome of evaluating a builder against one state snapshot.
pub struct Built<S, T, U> {
    /// Accepted value. `None` if any field in the tree rejected its input.
    pub result: Option<T>,
    /// Validation failures, visible or not, in evaluation order.
    pub annotations: Vec<Annotation>,
    producer: Render<S, U>,
    stamp: Stamp<S>,
}

impl<S: 'static, T, U: 'static> Built<S, T, U> {
    pub fn new(result: Option<T>, producer: impl Fn(Callback<S>) -> U + 'static) -> Self {
        Self::from_parts(result, Vec::new(), producer)
    }

    pub fn from_parts(
        result: Option<T>,
        annotations: Vec<Annotation>,
        producer: impl Fn(Callback<S>) -> U + 'static,
    ) -> Self {
        Self {
            result,
            annotations,
            producer: Rc::new(producer),
            stamp: Rc::new(|state| state),
        }
    }

    pub fn into_parts(self) -> (Option<T>, Vec<Annotation>, Render<S, U>, Stamp<S>) {
        (self.result, self.annotations, self.producer, self.stamp)
    }

    /// Render the UI, routing every update through `on_change`.
    pub fn ui(&self, on_change: impl Fn(S) + 'static) -> U {
        self.render(Rc::new(on_change))
    }

    pub fn render(&self, on_change: Callback<S>) -> U {
        (self.producer)(on_change)
    }

    pub fn is_valid(&self) -> bool {
        self.result.is_some()
    }

    /// Annotations the user should currently see.
    pub fn visible_annotations(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter().filter(|annotation| annotation.visible)
    }

    /// Drop the accepted value.
    pub fn reject(mut self) -> Self {
        self.result = None;
        self
    }

    /// Tag annotations that don't name a field yet with `key`.
    pub fn keyed(mut self, key: &str) -> Self {
        for annotation in &mut self.annotations {
            if annotation.field.is_none() {
                annotation.field = Some(key.to_string());
            }
        }
        self
    }

    /// Apply the acceptance stamp to `state`.
    ///
    /// Only meaningful for the state this was evaluated against.
    pub fn stamp(&self, state: S) -> S {
        (self.stamp)(state)
    }

    /// Run `f` after the existing stamp.
    pub fn stamped(mut self, f: impl Fn(S) -> S + 'static) -> Self {
        let inner = self.stamp;
        self.stamp = Rc::new(move |state| f(inner(state)));
        self
    }

    pub fn map<T2>(self, f: impl FnOnce(T) -> T2) -> Built<S, T2, U> {
        Built {
            result: self.result.map(f),
            annotations: self.annotations,
            producer: self.producer,
            stamp: self.stamp,
        }
    }

    pub fn map_ui<V: 'static>(self, f: impl Fn(U) -> V + 'static) -> Built<S, T, V> {
        let producer = self.producer;
        Built {
            result: self.result,
            annotations: self.annotations,
            producer: Rc::new(move |on_change| f(producer(on_change))),
            stamp: self.stamp,
        }
    }

    /// Move into the record `whole` through `lens`: updates the UI emits and
    /// the stamp both touch only the focused slice.
    pub fn focused<O: Clone + 'static>(self, whole: O, lens: Lens<O, S>) -> Built<O, T, U>
    where
        S: Clone,
    {
        let producer = self.producer;
        let stamp = self.stamp;
        Built {
            result: self.result,
            annotations: self.annotations,
            producer: Rc::new(move |on_change: Callback<O>| {
                let whole = whole.clone();
                let forward: Callback<S> =
                    Rc::new(move |part: S| on_change(lens.set(whole.clone(), part)));
                producer(forward)
            }),
            stamp: Rc::new(move |outer: O| lens.modify(outer, |part| stamp(part))),
        }
    }
}

impl<S, T: std::fmt::Debug, U> std::fmt::Debug for Built<S, T, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Built")
            .field("result", &self.result)
            .field("annotations", &self.annotations)
            .finish_non_exhaustive()
    }
}

/// A form, or a piece of one, over state `S`, accepting values of type `T`
/// and rendering to `U`.
pub struct FormBuilder<S, T, U> {
    run: Rc<dyn Fn(&S) -> Built<S, T, U>>,
}

impl<S, T, U> Clone for FormBuilder<S, T, U> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<S: 'static, T: 'static, U: 'static> FormBuilder<S, T, U> {
    pub fn new(run: impl Fn(&S) -> Built<S, T, U> + 'static) -> Self {
        Self { run: Rc::new(run) }
    }

    /// Evaluate against a state snapshot.
    pub fn build(&self, state: &S) -> Built<S, T, U> {
        (self.run)(state)
    }

    /// `state` with every field's acceptance recomputed against it.
    pub fn settle(&self, state: S) -> S {
        self.build(&state).stamp(state)
    }

    /// Always accepts `value` and renders `ui`, ignoring state.
    pub fn pure(value: T, ui: U) -> Self
    where
        T: Clone,
        U: Clone,
    {
        Self::new(move |_| {
            let ui = ui.clone();
            Built::new(Some(value.clone()), move |_| ui.clone())
        })
    }

    /// Transform the accepted value.
    pub fn map<T2: 'static>(self, f: impl Fn(T) -> T2 + 'static) -> FormBuilder<S, T2, U> {
        FormBuilder::new(move |state: &S| self.build(state).map(&f))
    }

    /// Transform the rendered fragment. Result and update wiring are untouched.
    pub fn map_ui<V: 'static>(self, f: impl Fn(U) -> V + 'static) -> FormBuilder<S, T, V> {
        let f = Rc::new(f);
        FormBuilder::new(move |state: &S| {
            let f = Rc::clone(&f);
            self.build(state).map_ui(move |ui| f(ui))
        })
    }

    /// Embed this builder into a larger state `O` through `lens`.
    ///
    /// Updates from the UI are written back with the lens setter against the
    /// snapshot the builder was evaluated on, so only the focused slice changes.
    pub fn focus<O: Clone + 'static>(self, lens: Lens<O, S>) -> FormBuilder<O, T, U>
    where
        S: Clone,
    {
        FormBuilder::new(move |outer: &O| self.build(lens.get(outer)).focused(outer.clone(), lens))
    }
}

/// Build a form whose shape depends on the current state.
///
/// `f` is called on every evaluation with the state snapshot, so a field can
/// read its siblings' live values (a confirmation field comparing against the
/// password, say). The siblings it reads must belong to the same state.
pub fn with_value<S: 'static, T: 'static, U: 'static>(
    f: impl Fn(&S) -> FormBuilder<S, T, U> + 'static,
) -> FormBuilder<S, T, U> {
    FormBuilder::new(move |state: &S| f(state).build(state))
}
