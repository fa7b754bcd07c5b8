/// Getter and copy-on-write setter for one slice `A` of a record `S`.
///
/// Usually generated with `#[derive(Lenses)]`, which adds a `<field>_lens()`
/// constructor per named field.
pub struct Lens<S, A> {
    get: fn(&S) -> &A,
    set: fn(S, A) -> S,
}

impl<S, A> Lens<S, A> {
    pub const fn new(get: fn(&S) -> &A, set: fn(S, A) -> S) -> Self {
        Self { get, set }
    }

    pub fn get<'a>(&self, whole: &'a S) -> &'a A {
        (self.get)(whole)
    }

    /// Replace the slice, keeping every other part of `whole`.
    pub fn set(&self, whole: S, part: A) -> S {
        (self.set)(whole, part)
    }

    pub fn modify(&self, whole: S, f: impl FnOnce(A) -> A) -> S
    where
        A: Clone,
    {
        let part = f(self.get(&whole).clone());
        self.set(whole, part)
    }
}

impl<S, A> Clone for Lens<S, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, A> Copy for Lens<S, A> {}

impl<S, A> std::fmt::Debug for Lens<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lens").finish_non_exhaustive()
    }
}
