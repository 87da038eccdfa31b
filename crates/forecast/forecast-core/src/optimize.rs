//! Bounded scalar minimization
//!
//! Projected quasi-Newton search over a closed interval. The gradient is
//! approximated with forward differences (backward at the upper bound), the
//! inverse curvature is refreshed with a secant update after every accepted
//! step, and each step is clipped to the feasible interval before an Armijo
//! backtracking line search.
//!
//! Used to pick the smoothing factor that minimizes the in-sample MSE of
//! simple exponential smoothing.

use forecast_spi::{ForecastError, Result};
use tracing::{trace, warn};

/// Armijo sufficient-decrease constant
const ARMIJO_C1: f64 = 1e-4;

/// Stopping criteria and finite-difference settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimizeOptions {
    /// Finite-difference step for the gradient
    pub eps: f64,
    /// Stop when the projected gradient falls below this
    pub pgtol: f64,
    /// Stop when the relative decrease of the objective falls below this
    pub ftol: f64,
    /// Maximum number of accepted steps
    pub max_iter: usize,
    /// Maximum number of halvings in one line search
    pub max_line_search: usize,
}

impl Default for MinimizeOptions {
    fn default() -> Self {
        Self {
            eps: 1e-8,
            pgtol: 1e-5,
            ftol: 1e7 * f64::EPSILON,
            max_iter: 15_000,
            max_line_search: 20,
        }
    }
}

/// Outcome of a bounded minimization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimizeResult {
    /// Minimizer, always inside the bounds
    pub x: f64,
    /// Objective value at `x`
    pub fun: f64,
    /// Number of accepted steps
    pub iterations: usize,
    /// Whether a stopping tolerance was met
    pub converged: bool,
}

/// Minimize `f` over `[lower, upper]` starting from `x0`
///
/// `x0` is clipped into the interval first, so a start point outside the
/// bounds (or NaN) begins the search at the nearest bound.
///
/// # Errors
///
/// - `InvalidParameter` if the bounds are not finite or `lower > upper`
/// - `NumericalError` if the objective is not finite at the start point
pub fn minimize_bounded<F>(
    f: F,
    x0: f64,
    lower: f64,
    upper: f64,
    options: &MinimizeOptions,
) -> Result<MinimizeResult>
where
    F: Fn(f64) -> f64,
{
    if !lower.is_finite() || !upper.is_finite() || lower > upper {
        return Err(ForecastError::invalid_parameter(
            "bounds",
            format!("expected finite lower <= upper, got ({lower}, {upper})"),
        ));
    }

    let mut x = x0.max(lower).min(upper);
    let mut fx = f(x);
    if !fx.is_finite() {
        return Err(ForecastError::NumericalError(format!(
            "objective is not finite at x = {x}"
        )));
    }

    let finished = |x: f64, fun: f64, iterations: usize, converged: bool| MinimizeResult {
        x,
        fun,
        iterations,
        converged,
    };

    if lower == upper {
        return Ok(finished(x, fx, 0, true));
    }

    let mut g = gradient(&f, x, fx, upper, options.eps);
    let mut inv_hess = 1.0;

    for iter in 1..=options.max_iter {
        let pg = (x - g).max(lower).min(upper) - x;
        if pg.abs() <= options.pgtol {
            return Ok(finished(x, fx, iter - 1, true));
        }

        let d = -inv_hess * g;
        let t_max = if d > 0.0 { (upper - x) / d } else { (lower - x) / d };
        if !(t_max > 0.0) {
            return Ok(finished(x, fx, iter - 1, true));
        }

        // The first step has no curvature information: move one unit at most.
        let mut t = if iter == 1 {
            (1.0 / d.abs()).min(t_max)
        } else {
            t_max.min(1.0)
        };

        let slope = g * d;
        let mut accepted = None;
        for _ in 0..options.max_line_search {
            let x_try = (x + t * d).max(lower).min(upper);
            let f_try = f(x_try);
            if f_try.is_finite() && f_try <= fx + ARMIJO_C1 * t * slope {
                accepted = Some((x_try, f_try));
                break;
            }
            t *= 0.5;
        }

        let Some((x_new, f_new)) = accepted else {
            trace!(iter, x, fx, "line search found no decrease");
            return Ok(finished(x, fx, iter - 1, false));
        };

        let g_new = gradient(&f, x_new, f_new, upper, options.eps);
        let s = x_new - x;
        let y = g_new - g;
        let decrease = (fx - f_new) / fx.abs().max(f_new.abs()).max(1.0);

        x = x_new;
        fx = f_new;
        g = g_new;
        trace!(iter, x, fx, g, "accepted step");

        if decrease <= options.ftol {
            return Ok(finished(x, fx, iter, true));
        }
        if s * y > f64::EPSILON * y * y {
            inv_hess = s / y;
        }
    }

    warn!(
        max_iter = options.max_iter,
        x, fx, "bounded minimization stopped before converging"
    );
    Ok(finished(x, fx, options.max_iter, false))
}

fn gradient<F>(f: &F, x: f64, fx: f64, upper: f64, eps: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    if x + eps <= upper {
        (f(x + eps) - fx) / eps
    } else {
        (fx - f(x - eps)) / eps
    }
}
