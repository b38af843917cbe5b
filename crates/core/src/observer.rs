/// Watches an iterative solver one step at a time.
///
/// A solver hands each event to its observer right after evaluating the
/// function, so the observer sees every iterate and its residual. The Newton
/// solver uses this to let callers record the path it takes toward a root, or
/// to cut a slow solve short without raising the iteration budget.
///
/// Returning `Some(action)` asks the solver for one of its own control
/// actions; `None` leaves the iteration alone. Any `FnMut(&E) -> Option<A>`
/// closure is an observer, and `()` is the observer that never acts.
pub trait Observer<E, A> {
    /// Inspects one solver event and optionally requests an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
