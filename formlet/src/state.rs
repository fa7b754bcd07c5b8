use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Shared, single-threaded state cell.
///
/// Cheap to clone; every clone sees the same value. Writers replace the value
/// wholesale and raise the dirty flag so the owner knows to re-render.
///
/// # Example
///
/// ```ignore
/// let state = State::new(0);
/// let writer = state.clone();
/// writer.set(1);
/// assert!(state.is_dirty());
/// ```
#[derive(Debug)]
pub struct State<T> {
    inner: Rc<RefCell<T>>,
    dirty: Rc<Cell<bool>>,
}

impl<T> State<T> {
    /// Create a new state with the given value
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
            dirty: Rc::new(Cell::new(false)),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner.borrow().clone()
    }

    /// Set a new value
    pub fn set(&self, value: T) {
        if let Ok(mut guard) = self.inner.try_borrow_mut() {
            *guard = value;
            self.dirty.set(true);
            log::trace!("state replaced");
        } else {
            log::warn!("state is borrowed, update dropped");
        }
    }

    /// Check if the state has been modified since last check
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.set(false);
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            dirty: Rc::clone(&self.dirty),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
