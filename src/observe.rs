/// Receives solver events as they happen.
///
/// Observers let callers watch an iteration in progress, enabling logging
/// or progress reporting, without changing the solver's API. Observation is
/// strictly one-way: an observer cannot alter the solver's control flow or
/// its returned result, so running with or without one yields identical
/// outcomes.
///
/// Closures automatically implement `Observer`, and a built-in impl for
/// `()` provides a no-op observer.
pub trait Observer<E> {
    /// Observes a solver event.
    fn observe(&mut self, event: &E);
}

/// Blanket implementation for observer closures.
impl<E, F> Observer<E> for F
where
    F: FnMut(&E),
{
    fn observe(&mut self, event: &E) {
        self(event);
    }
}

/// A no-op observer.
impl<E> Observer<E> for () {
    fn observe(&mut self, _event: &E) {}
}
