use std::fmt;

use tangent_core::MathFunc;

/// Default step size for [`FiniteDifference`].
pub const DEFAULT_STEP: f64 = 1e-4;

/// Central finite-difference approximation of a function's derivative.
///
/// Evaluates the wrapped function at two points straddling `x`, `step` apart:
///
/// ```text
/// f'(x) ≈ (f(x + step/2) - f(x - step/2)) / step
/// ```
///
/// The approximation error is second order in `step`, but a very small step
/// amplifies floating-point cancellation, so the step should be chosen
/// relative to the scale of the function.
///
/// No domain checking is done. A non-finite function value near `x`, or a zero
/// step, yields a non-finite derivative rather than an error.
///
/// A `FiniteDifference` borrows its function and is itself a [`MathFunc`],
/// so it can be passed anywhere a derivative is expected.
pub struct FiniteDifference<'a, F: ?Sized> {
    function: &'a F,
    step: f64,
}

impl<'a, F> FiniteDifference<'a, F>
where
    F: MathFunc + ?Sized,
{
    /// Approximates the derivative of `function` using [`DEFAULT_STEP`].
    #[must_use]
    pub fn new(function: &'a F) -> Self {
        Self::with_step(function, DEFAULT_STEP)
    }

    /// Approximates the derivative of `function` using the given `step`.
    #[must_use]
    pub fn with_step(function: &'a F, step: f64) -> Self {
        Self { function, step }
    }

    /// Returns the step size.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }
}

/// Approximates the derivative of `function` using the given `step`.
///
/// Shorthand for [`FiniteDifference::with_step`].
#[must_use]
pub fn finite_difference<F>(function: &F, step: f64) -> FiniteDifference<'_, F>
where
    F: MathFunc + ?Sized,
{
    FiniteDifference::with_step(function, step)
}

impl<F> MathFunc for FiniteDifference<'_, F>
where
    F: MathFunc + ?Sized,
{
    fn eval(&self, x: f64) -> f64 {
        let half = self.step / 2.0;
        (self.function.eval(x + half) - self.function.eval(x - half)) / self.step
    }
}

impl<F: ?Sized> Clone for FiniteDifference<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: ?Sized> Copy for FiniteDifference<'_, F> {}

impl<F: ?Sized> fmt::Debug for FiniteDifference<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FiniteDifference")
            .field("step", &self.step)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;

    #[test]
    fn quadratic_with_default_step() {
        let f = |x: f64| x * x - x;
        let diff = FiniteDifference::new(&f);

        assert_abs_diff_eq!(diff.eval(0.5), 0.0, epsilon = 1e-8);
        assert_abs_diff_eq!(diff.eval(0.6), 0.2, epsilon = 1e-8);
        assert_abs_diff_eq!(diff.eval(0.0), -1.0, epsilon = 1e-8);
    }

    #[test]
    fn sine_with_small_step() {
        let diff = finite_difference(&f64::sin, 1e-7);

        assert_abs_diff_eq!(diff.eval(0.0), 1.0, epsilon = 1e-8);
        assert_abs_diff_eq!(diff.eval(FRAC_PI_2), 0.0, epsilon = 1e-8);
        assert_abs_diff_eq!(diff.eval(PI), -1.0, epsilon = 1e-8);
    }

    #[test]
    fn uses_symmetric_points() {
        // Exact for quadratics, so the only difference is the evaluation order.
        let f = |x: f64| 3.0 * x * x;
        let diff = finite_difference(&f, 0.5);
        let expected = (f(2.0 + 0.25) - f(2.0 - 0.25)) / 0.5;

        assert_eq!(diff.eval(2.0).to_bits(), expected.to_bits());
        assert_abs_diff_eq!(diff.eval(2.0), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn default_step_is_reported() {
        let diff = FiniteDifference::new(&f64::exp);
        assert_abs_diff_eq!(diff.step(), DEFAULT_STEP);
    }

    #[test]
    fn zero_step_propagates_non_finite() {
        let diff = finite_difference(&f64::sin, 0.0);
        assert!(!diff.eval(1.0).is_finite());
    }

    #[test]
    fn non_finite_function_values_propagate() {
        let diff = FiniteDifference::new(&f64::ln);
        assert!(diff.eval(-1.0).is_nan());
    }

    #[test]
    fn composes_with_itself() {
        let f = |x: f64| x * x * x;
        let first = FiniteDifference::new(&f);
        let second = finite_difference(&first, 1e-3);

        // d²/dx² x³ = 6x
        assert_abs_diff_eq!(second.eval(1.0), 6.0, epsilon = 1e-3);
    }

    #[test]
    fn is_send_and_sync_for_thread_safe_functions() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}

        let offset = 2.0;
        let f = move |x: f64| x * x + offset;
        let diff = FiniteDifference::new(&f);
        assert_send_sync(&diff);

        let boxed: Box<dyn MathFunc + Send + Sync> = Box::new(f64::sin);
        assert_send_sync(&FiniteDifference::new(&*boxed));
    }

    #[test]
    fn works_with_trait_objects() {
        let f: Box<dyn MathFunc> = Box::new(|x: f64| 2.0 * x + 1.0);
        let diff = FiniteDifference::new(&*f);
        assert_abs_diff_eq!(diff.eval(10.0), 2.0, epsilon = 1e-8);
    }
}
