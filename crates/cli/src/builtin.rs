use std::fmt;

use clap::ValueEnum;
use tangent_core::MathFunc;

/// Built-in functions the CLI can differentiate and solve.
///
/// Each variant carries its analytic derivative so the solver can be run with
/// either an exact or a finite-difference jacobian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Builtin {
    Sin,
    Cos,
    Tan,
    Exp,
    Ln,
    Sqrt,
    Sinh,
    Cosh,
    Tanh,
    Atan,
    /// x²
    Square,
    /// x³
    Cube,
}

impl Builtin {
    /// Evaluates the function at `x`.
    #[must_use]
    pub fn value(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Exp => x.exp(),
            Self::Ln => x.ln(),
            Self::Sqrt => x.sqrt(),
            Self::Sinh => x.sinh(),
            Self::Cosh => x.cosh(),
            Self::Tanh => x.tanh(),
            Self::Atan => x.atan(),
            Self::Square => x * x,
            Self::Cube => x * x * x,
        }
    }

    /// Evaluates the analytic derivative at `x`.
    #[must_use]
    pub fn derivative(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.cos(),
            Self::Cos => -x.sin(),
            Self::Tan => 1.0 / (x.cos() * x.cos()),
            Self::Exp => x.exp(),
            Self::Ln => 1.0 / x,
            Self::Sqrt => 0.5 / x.sqrt(),
            Self::Sinh => x.cosh(),
            Self::Cosh => x.sinh(),
            Self::Tanh => 1.0 - x.tanh() * x.tanh(),
            Self::Atan => 1.0 / (1.0 + x * x),
            Self::Square => 2.0 * x,
            Self::Cube => 3.0 * x * x,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Atan => "atan",
            Self::Square => "square",
            Self::Cube => "cube",
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl MathFunc for Builtin {
    fn eval(&self, x: f64) -> f64 {
        self.value(x)
    }
}

/// The residual `f(x) - target` of a built-in function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equation {
    pub function: Builtin,
    pub target: f64,
}

impl MathFunc for Equation {
    fn eval(&self, x: f64) -> f64 {
        self.function.value(x) - self.target
    }
}

/// The analytic derivative of an [`Equation`]'s residual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slope(pub Builtin);

impl MathFunc for Slope {
    fn eval(&self, x: f64) -> f64 {
        self.0.derivative(x)
    }
}
