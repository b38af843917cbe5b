//! Solvers for equation problems — finding roots of real functions.
//!
//! An equation here is a [`MathFunc`] whose output is the residual: solvers
//! search for an `x` that drives that residual toward zero.
//!
//! # Solvers
//!
//! - [`newton`] — Newton-Raphson iteration from a starting guess, using an
//!   analytic derivative or a finite-difference approximation
//!
//! [`MathFunc`]: tangent_core::MathFunc

pub mod newton;
