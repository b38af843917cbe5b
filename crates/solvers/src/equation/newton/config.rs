use thiserror::Error;

use crate::derivative::DEFAULT_STEP;

/// Configuration for the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    residual_tol: f64,
    step: f64,
}

/// Errors that can occur when validating a Newton solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("residual_tol must be finite and positive")]
    ResidualTol,

    #[error("step must be finite and positive")]
    Step,
}

impl Default for Config {
    /// At most 1000 iterations, a residual tolerance of `1e-6`, and the
    /// default finite-difference step of `1e-4`.
    fn default() -> Self {
        Self {
            max_iters: 1000,
            residual_tol: 1e-6,
            step: DEFAULT_STEP,
        }
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if `residual_tol` or `step` is not finite and positive.
    /// Convergence requires `|f(x)| < residual_tol`, so a zero tolerance could
    /// never be met.
    pub fn new(max_iters: usize, residual_tol: f64, step: f64) -> Result<Self, ConfigError> {
        if !residual_tol.is_finite() || residual_tol <= 0.0 {
            return Err(ConfigError::ResidualTol);
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::Step);
        }

        Ok(Self {
            max_iters,
            residual_tol,
            step,
        })
    }

    /// Returns the maximum number of function evaluations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the residual magnitude below which the solver has converged.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }

    /// Returns the finite-difference step used when no derivative is supplied.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }
}
