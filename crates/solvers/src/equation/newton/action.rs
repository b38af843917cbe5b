/// Control actions supported by the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver before the next update.
    ///
    /// The solve ends with [`Error::StoppedByObserver`](super::Error::StoppedByObserver),
    /// which carries the iterate the observer stopped on. Ignored when that
    /// iterate has already converged.
    StopEarly,
}
