use formdom::Element;

/// Rendered fragments of a composed record, keyed by field name in
/// declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Fields<U> {
    entries: Vec<(&'static str, U)>,
}

impl<U> Fields<U> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, key: &'static str, ui: U) {
        self.entries.push((key, ui));
    }

    pub fn get(&self, key: &str) -> Option<&U> {
        self.entries
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, ui)| ui)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &U)> {
        self.entries.iter().map(|(name, ui)| (*name, ui))
    }

    pub fn into_values(self) -> impl Iterator<Item = U> {
        self.entries.into_iter().map(|(_, ui)| ui)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<U> Default for Fields<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Fields<Element>> for Element {
    /// Stack the field fragments in a column.
    fn from(fields: Fields<Element>) -> Self {
        Element::col().children(fields.into_values())
    }
}
