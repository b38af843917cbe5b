//! Command-line demo for the Tangent root finder.
//!
//! ```text
//! tangent derive sin --at 3.14159 --step 1e-7
//! tangent solve exp --target 2 --guess 0
//! RUST_LOG=trace tangent solve cos --guess 1 --analytic
//! ```

mod builtin;

use clap::{Parser, Subcommand};
use eyre::WrapErr;
use log::info;
use tangent_core::MathFunc;
use tangent_solvers::{
    derivative::{DEFAULT_STEP, finite_difference},
    equation::newton::{self, Config},
};

use builtin::{Builtin, Equation, Slope};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints the finite-difference derivative of a function at a point.
    Derive {
        #[arg(value_enum)]
        function: Builtin,
        #[arg(long, allow_negative_numbers = true)]
        at: f64,
        #[arg(long, default_value_t = DEFAULT_STEP)]
        step: f64,
    },
    /// Solves `function(x) = target` with Newton's method and prints x.
    Solve {
        #[arg(value_enum)]
        function: Builtin,
        #[arg(long, allow_negative_numbers = true)]
        guess: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        target: f64,
        /// Use the analytic derivative instead of a finite difference.
        #[arg(long, default_value_t = false)]
        analytic: bool,
        #[arg(long, default_value_t = 1000)]
        max_iters: usize,
        #[arg(long, default_value_t = 1e-6)]
        tolerance: f64,
        #[arg(long, default_value_t = DEFAULT_STEP)]
        step: f64,
    },
}

fn main() -> eyre::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    println!("{}", run(cli.command)?);
    Ok(())
}

/// Runs a command and returns the text to print.
fn run(command: Command) -> eyre::Result<String> {
    match command {
        Command::Derive { function, at, step } => {
            info!("differentiating {function} at {at} with step {step}");
            let slope = finite_difference(&function, step).eval(at);
            Ok(slope.to_string())
        }
        Command::Solve {
            function,
            guess,
            target,
            analytic,
            max_iters,
            tolerance,
            step,
        } => {
            let config = Config::new(max_iters, tolerance, step)?;
            let equation = Equation { function, target };
            info!("solving {function}(x) = {target} from guess {guess}");

            let solution = if analytic {
                newton::solve_unobserved(&equation, &Slope(function), guess, &config)
            } else {
                newton::solve_approx(&equation, guess, &config)
            }
            .wrap_err_with(|| format!("solving {function}(x) = {target}"))?;

            info!(
                "converged after {} iterations, residual {}",
                solution.iters, solution.residual
            );
            Ok(solution.x.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::{LN_2, PI};

    use approx::assert_abs_diff_eq;
    use clap::CommandFactory;

    fn run_args(args: &[&str]) -> eyre::Result<f64> {
        let cli = Cli::try_parse_from(std::iter::once("tangent").chain(args.iter().copied()))?;
        Ok(run(cli.command)?.parse()?)
    }

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn derive_sine_at_pi() {
        let pi = PI.to_string();
        let slope = run_args(&["derive", "sin", "--at", &pi, "--step", "1e-7"]).expect("runs");
        assert_abs_diff_eq!(slope, -1.0, epsilon = 1e-8);
    }

    #[test]
    fn solve_with_finite_difference() {
        let x = run_args(&["solve", "exp", "--target", "2", "--guess", "0"]).expect("runs");
        assert_abs_diff_eq!(x, LN_2, epsilon = 1e-6);
    }

    #[test]
    fn solve_with_analytic_derivative() {
        let x = run_args(&["solve", "cube", "--target", "-8", "--guess", "-1", "--analytic"])
            .expect("runs");
        assert_abs_diff_eq!(x, -2.0, epsilon = 1e-6);
    }

    #[test]
    fn solve_without_root_fails() {
        let result = run_args(&["solve", "cosh", "--guess", "0.5", "--max-iters", "50"]);
        let error = result.expect_err("cosh never reaches zero");
        assert!(format!("{error:#}").contains("could not find solution"));
    }

    #[test]
    fn solve_rejects_invalid_config() {
        let result = run_args(&["solve", "sin", "--guess", "3", "--step", "0"]);
        assert!(result.is_err());
    }
}
