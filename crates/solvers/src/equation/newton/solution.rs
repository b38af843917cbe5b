/// The result of a converged Newton solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Approximate root.
    ///
    /// Guaranteed only to satisfy the residual tolerance; it need not be the
    /// root nearest the guess, nor the only one.
    pub x: f64,

    /// Function value at `x`.
    pub residual: f64,

    /// Number of Newton updates applied before convergence.
    pub iters: usize,
}
