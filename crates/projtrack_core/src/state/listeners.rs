//! Generic snapshot listener registry.

use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Boxed failure reported by a listener.
pub type ListenerFailure = Box<dyn Error + 'static>;

/// Result type returned by every listener invocation.
pub type ListenerResult = Result<(), ListenerFailure>;

/// Callback receiving a full snapshot after each mutation.
pub type Listener<T> = Rc<dyn Fn(&[T]) -> ListenerResult>;

/// Error raised when a listener fails during dispatch.
///
/// Dispatch stops at the first failing listener; later listeners are not run.
#[derive(Debug)]
pub struct NotifyError {
    /// Registration index of the failing listener.
    pub index: usize,
    pub source: ListenerFailure,
}

impl Display for NotifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "listener #{} failed: {}", self.index, self.source)
    }
}

impl Error for NotifyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Ordered, append-only list of snapshot listeners.
///
/// There is no removal: listeners live as long as the registry.
pub struct ListenerRegistry<T> {
    listeners: RefCell<Vec<Listener<T>>>,
}

impl<T> Default for ListenerRegistry<T> {
    fn default() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
        }
    }
}

impl<T> ListenerRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one listener. Identical callbacks are not de-duplicated.
    pub fn add(&self, listener: Listener<T>) {
        self.listeners.borrow_mut().push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }

    /// Invokes every listener with `snapshot`, stopping at the first failure.
    ///
    /// Iterates a copy of the listener list, so listeners added during
    /// dispatch only see later notifications.
    pub fn notify(&self, snapshot: &[T]) -> Result<(), NotifyError> {
        let listeners = self.listeners.borrow().clone();
        for (index, listener) in listeners.iter().enumerate() {
            listener(snapshot).map_err(|source| NotifyError { index, source })?;
        }
        Ok(())
    }
}
