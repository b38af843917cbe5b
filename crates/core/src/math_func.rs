/// A pure function of one real variable.
///
/// Implementations must be deterministic: the same `x` always produces the
/// same value. Solvers call a `MathFunc` many times and assume calls have no
/// side effects.
///
/// Every closure or function pointer of shape `Fn(f64) -> f64` is a
/// `MathFunc`, so built-ins like `f64::sin` can be passed directly.
///
/// # Example
///
/// ```rust
/// use tangent_core::MathFunc;
///
/// struct Shifted {
///     offset: f64,
/// }
///
/// impl MathFunc for Shifted {
///     fn eval(&self, x: f64) -> f64 {
///         x - self.offset
///     }
/// }
///
/// assert_eq!(Shifted { offset: 2.0 }.eval(5.0), 3.0);
/// assert_eq!(f64::abs.eval(-1.5), 1.5);
/// ```
pub trait MathFunc {
    /// Evaluates the function at `x`.
    ///
    /// Non-finite results are returned as-is; implementations should not panic
    /// on inputs outside their domain.
    fn eval(&self, x: f64) -> f64;
}

impl<F> MathFunc for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn eval_twice(f: &dyn MathFunc, x: f64) -> [f64; 2] {
        [f.eval(x), f.eval(x)]
    }

    #[test]
    fn closures_are_math_funcs() {
        let scale = 3.0;
        let f = move |x: f64| scale * x;
        assert_relative_eq!(f.eval(2.0), 6.0);
    }

    #[test]
    fn fn_pointers_are_math_funcs() {
        assert_relative_eq!(f64::cos.eval(0.0), 1.0);
    }

    #[test]
    fn usable_as_trait_object() {
        let [a, b] = eval_twice(&|x: f64| x * x - x, 0.5);
        assert_eq!(a.to_bits(), b.to_bits());
        assert_relative_eq!(a, -0.25);
    }

    #[test]
    fn non_finite_values_propagate() {
        assert!(f64::ln.eval(-1.0).is_nan());
        assert!((|x: f64| 1.0 / x).eval(0.0).is_infinite());
    }
}
