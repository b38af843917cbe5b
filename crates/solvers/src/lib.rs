//! Numerical solvers for the Tangent toolkit.
//!
//! - [`derivative`] — finite-difference approximations of a function's derivative
//! - [`equation`] — root finding for equations of one real variable

pub mod derivative;
pub mod equation;
