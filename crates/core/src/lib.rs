//! Core traits for the Tangent numerical toolkit.
//!
//! This crate defines the shared abstractions that solvers and callers build on:
//!
//! - [`MathFunc`] — a pure function of one real variable
//! - [`Observer`] — receives solver events and optionally returns control actions

mod math_func;
mod observer;

pub use math_func::MathFunc;
pub use observer::Observer;
