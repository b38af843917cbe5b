use thiserror::Error;

/// Errors that can occur during Newton solving.
///
/// Numerical trouble such as a zero derivative is not reported separately.
/// The resulting non-finite iterate never meets the tolerance, so the solve
/// ends in [`Error::NoConvergence`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error(
        "could not find solution after {iters} iterations (last x = {x}, residual = {residual})"
    )]
    NoConvergence { iters: usize, x: f64, residual: f64 },

    #[error("stopped by observer after {iters} iterations at x = {x} (residual = {residual})")]
    StoppedByObserver { iters: usize, x: f64, residual: f64 },
}

impl Error {
    /// Returns the last iterate the solver evaluated.
    ///
    /// Returns the initial guess if the solver never evaluated the function.
    #[must_use]
    pub fn last_x(&self) -> f64 {
        match self {
            Self::NoConvergence { x, .. } | Self::StoppedByObserver { x, .. } => *x,
        }
    }
}
