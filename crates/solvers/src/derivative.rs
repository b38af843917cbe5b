//! Numerical derivatives of real functions.
//!
//! Analytic derivatives need a computer algebra system; a finite-difference
//! approximation only needs the function itself. The solvers in
//! [`equation`](crate::equation) fall back to [`FiniteDifference`] whenever
//! the caller does not supply a derivative.

mod finite_difference;

pub use finite_difference::{DEFAULT_STEP, FiniteDifference, finite_difference};
