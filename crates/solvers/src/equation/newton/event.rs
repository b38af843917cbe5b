/// Event emitted by the Newton solver after each function evaluation.
///
/// The event is emitted before the convergence check, so the final event of a
/// converged solve carries the root that is returned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (0 for the initial guess).
    pub iter: usize,

    /// The iterate that was evaluated.
    pub x: f64,

    /// Function value at `x`.
    pub residual: f64,
}
