//! Newton-Raphson root finding for functions of one real variable.
//!
//! # Algorithm
//!
//! Starting from `x = guess`, the solver repeatedly evaluates the residual
//! `y = f(x)`. If `|y|` is below the residual tolerance it returns `x`;
//! otherwise it applies the Newton update
//!
//! ```text
//! x ← x - f(x) / f'(x)
//! ```
//!
//! and tries again, up to `max_iters` evaluations.
//!
//! Convergence is judged on the residual only, never on the step size: the
//! solver is done when `f(x)` is close to zero, not when `x` stops moving.
//!
//! # Failure
//!
//! Newton's method converges quadratically near a simple root but may diverge,
//! oscillate, or hit a flat region far from one. The iteration bound is the
//! only safeguard. A zero derivative is not trapped; the update produces a
//! non-finite iterate that can never satisfy the tolerance, so the solve ends
//! with [`Error::NoConvergence`] once the budget is spent. Functions without a
//! real root fail the same way.
//!
//! # Derivatives
//!
//! [`solve`] and [`solve_unobserved`] take an explicit derivative (jacobian).
//! [`solve_approx`] and [`find_root`] synthesize one with
//! [`FiniteDifference`] using [`Config::step`].
//!
//! # Observer Events
//!
//! [`solve`] emits one [`Event`] per function evaluation, before the
//! convergence check. Observers can return [`Action::StopEarly`] to end the
//! solve with [`Error::StoppedByObserver`]. A stop on an iterate that already
//! meets the tolerance still returns the converged [`Solution`].

mod action;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::Solution;

use log::{debug, trace};
use tangent_core::{MathFunc, Observer};

use crate::derivative::FiniteDifference;

/// Finds a root of `function` using Newton's method with an explicit derivative.
///
/// The observer receives an [`Event`] after every function evaluation.
/// See the [module docs](self) for details.
///
/// # Errors
///
/// Returns [`Error::NoConvergence`] if the residual never falls below the
/// tolerance within `config.max_iters()` evaluations, or
/// [`Error::StoppedByObserver`] if the observer stops the solve.
pub fn solve<F, J, Obs>(
    function: &F,
    jacobian: &J,
    guess: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: MathFunc + ?Sized,
    J: MathFunc + ?Sized,
    Obs: Observer<Event, Action>,
{
    let mut x = guess;
    let mut last = (guess, f64::NAN);

    for iter in 0..config.max_iters() {
        let residual = function.eval(x);
        trace!("newton iter {iter}: x = {x}, residual = {residual}");

        let event = Event { iter, x, residual };
        let action = observer.observe(&event);

        // A converged iterate is returned even if the observer asked to stop.
        if residual.abs() < config.residual_tol() {
            debug!("newton converged to x = {x} after {iter} iterations");
            return Ok(Solution {
                x,
                residual,
                iters: iter,
            });
        }

        if let Some(Action::StopEarly) = action {
            debug!("newton stopped by observer at iter {iter}, x = {x}");
            return Err(Error::StoppedByObserver {
                iters: iter,
                x,
                residual,
            });
        }

        last = (x, residual);
        x -= residual / jacobian.eval(x);
    }

    let (x, residual) = last;
    debug!(
        "newton failed to converge after {} iterations, last x = {x}, residual = {residual}",
        config.max_iters()
    );
    Err(Error::NoConvergence {
        iters: config.max_iters(),
        x,
        residual,
    })
}

/// Finds a root with an explicit derivative, without observation.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::NoConvergence`] if the solver does not converge.
pub fn solve_unobserved<F, J>(
    function: &F,
    jacobian: &J,
    guess: f64,
    config: &Config,
) -> Result<Solution, Error>
where
    F: MathFunc + ?Sized,
    J: MathFunc + ?Sized,
{
    solve(function, jacobian, guess, config, ())
}

/// Finds a root using a finite-difference approximation of the derivative.
///
/// The derivative is a [`FiniteDifference`] of `function` with step
/// [`Config::step`].
///
/// # Errors
///
/// Returns [`Error::NoConvergence`] if the solver does not converge.
pub fn solve_approx<F>(function: &F, guess: f64, config: &Config) -> Result<Solution, Error>
where
    F: MathFunc + ?Sized,
{
    let jacobian = FiniteDifference::with_step(function, config.step());
    solve(function, &jacobian, guess, config, ())
}

/// Finds a root of `function` near `guess` using default settings.
///
/// Uses a finite-difference derivative and [`Config::default`]: at most 1000
/// iterations, a residual tolerance of `1e-6`, and a step of `1e-4`.
///
/// # Errors
///
/// Returns [`Error::NoConvergence`] if the solver does not converge.
///
/// # Example
///
/// ```rust
/// use tangent_solvers::equation::newton;
///
/// let root = newton::find_root(&|x: f64| x * x - 2.0, 1.0).expect("should converge");
/// assert!((root - 2.0_f64.sqrt()).abs() < 1e-6);
/// ```
pub fn find_root<F>(function: &F, guess: f64) -> Result<f64, Error>
where
    F: MathFunc + ?Sized,
{
    solve_approx(function, guess, &Config::default()).map(|solution| solution.x)
}
