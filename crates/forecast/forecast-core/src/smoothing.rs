//! Simple exponential smoothing primitive
//!
//! ```text
//! S_0 = y_0
//! S_t = α y_{t-1} + (1 - α) S_{t-1}      t = 1..n-1
//! ŷ   = α y_{n-1} + (1 - α) S_{n-1}
//! ```
//!
//! The fit error is the sum of `(y_t - S_t)^2` over `t = 1..n-1`, divided by
//! `n`. Every smoothing-based model in this crate is built on this recursion,
//! either at a fixed alpha or at the alpha that minimizes the fit error.

use forecast_spi::{AlphaBounds, ForecastError, Result, SmoothingFit};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::optimize::{minimize_bounded, MinimizeOptions};

/// Smoothing factor at the start of the alpha search, before clipping to the bounds
const INITIAL_ALPHA: f64 = 0.0;

/// Outcome of an alpha search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizedSmoothing {
    /// Smoothing factor minimizing the fit error, within the search bounds
    pub alpha: f64,
    /// One-step-ahead forecast at `alpha`
    pub forecast: f64,
    /// Fit error at `alpha`
    pub mse: f64,
    /// Number of optimizer steps taken
    pub iterations: usize,
}

/// Run the smoothing recursion, returning the forecast and the fit error
///
/// # Errors
///
/// `EmptySeries` if `series` has no observations.
pub fn ses_forecast_mse(series: &[f64], alpha: f64) -> Result<SmoothingFit> {
    if series.is_empty() {
        return Err(ForecastError::EmptySeries);
    }
    Ok(fit(series, alpha))
}

/// Fit error of the smoothing recursion at `alpha`
pub fn ses_mse(series: &[f64], alpha: f64) -> Result<f64> {
    ses_forecast_mse(series, alpha).map(|fit| fit.mse)
}

/// One-step-ahead smoothing forecast at `alpha`
pub fn ses_forecast(series: &[f64], alpha: f64) -> Result<f64> {
    ses_forecast_mse(series, alpha).map(|fit| fit.forecast)
}

/// Search `bounds` for the alpha with the smallest fit error
pub fn optimize_ses(series: &[f64], bounds: AlphaBounds) -> Result<OptimizedSmoothing> {
    if series.is_empty() {
        return Err(ForecastError::EmptySeries);
    }

    let result = minimize_bounded(
        |alpha| fit(series, alpha).mse,
        INITIAL_ALPHA,
        bounds.lower,
        bounds.upper,
        &MinimizeOptions::default(),
    )?;
    let best = fit(series, result.x);

    debug!(
        alpha = result.x,
        mse = best.mse,
        iterations = result.iterations,
        converged = result.converged,
        n = series.len(),
        "optimized smoothing factor"
    );

    Ok(OptimizedSmoothing {
        alpha: result.x,
        forecast: best.forecast,
        mse: best.mse,
        iterations: result.iterations,
    })
}

/// One-step-ahead smoothing forecast at the alpha found by [`optimize_ses`]
pub fn optimized_ses_forecast(series: &[f64], bounds: AlphaBounds) -> Result<f64> {
    optimize_ses(series, bounds).map(|opt| opt.forecast)
}

/// Smoothing recursion over a non-empty series
fn fit(series: &[f64], alpha: f64) -> SmoothingFit {
    let n = series.len();
    let mut smoothed = series[0];
    let mut sse = 0.0;

    for pair in series.windows(2) {
        smoothed = alpha * pair[0] + (1.0 - alpha) * smoothed;
        let error = pair[1] - smoothed;
        sse += error * error;
    }

    SmoothingFit {
        forecast: alpha * series[n - 1] + (1.0 - alpha) * smoothed,
        mse: sse / n as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_computed_recursion() {
        // S0 = 10, S1 = 0.5*10 + 0.5*10 = 10, S2 = 0.5*12 + 0.5*10 = 11
        // errors: (12-10)^2 = 4, (14-11)^2 = 9 -> mse = 13 / 3
        // forecast = 0.5*14 + 0.5*11 = 12.5
        let fit = ses_forecast_mse(&[10.0, 12.0, 14.0], 0.5).unwrap();
        assert!((fit.forecast - 12.5).abs() < 1e-12);
        assert!((fit.mse - 13.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_observation() {
        let fit = ses_forecast_mse(&[42.0], 0.3).unwrap();
        assert_eq!(fit.forecast, 42.0);
        assert_eq!(fit.mse, 0.0);
    }

    #[test]
    fn test_constant_series() {
        let fit = ses_forecast_mse(&[5.0; 10], 0.2).unwrap();
        assert!((fit.forecast - 5.0).abs() < 1e-12);
        assert_eq!(fit.mse, 0.0);
    }

    #[test]
    fn test_alpha_one_is_naive() {
        let fit = ses_forecast_mse(&[3.0, 8.0, 1.0, 6.0], 1.0).unwrap();
        assert_eq!(fit.forecast, 6.0);
    }

    #[test]
    fn test_alpha_zero_keeps_first_value() {
        let fit = ses_forecast_mse(&[3.0, 8.0, 1.0, 6.0], 0.0).unwrap();
        assert_eq!(fit.forecast, 3.0);
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(ses_forecast_mse(&[], 0.5), Err(ForecastError::EmptySeries));
        assert_eq!(ses_forecast(&[], 0.5), Err(ForecastError::EmptySeries));
        assert_eq!(ses_mse(&[], 0.5), Err(ForecastError::EmptySeries));
        assert!(optimize_ses(&[], AlphaBounds::default()).is_err());
    }

    #[test]
    fn test_mse_non_negative() {
        let series = [0.0, 3.0, -2.0, 7.5, 0.0, 0.0, 1.0, -4.0];
        for step in 0..=20 {
            let alpha = step as f64 / 20.0;
            assert!(ses_mse(&series, alpha).unwrap() >= 0.0);
        }
    }

    #[test]
    fn test_optimized_alpha_within_bounds() {
        let series = [1.0, 5.0, 2.0, 8.0, 3.0, 9.0, 4.0, 7.0, 2.0, 6.0];
        for bounds in [
            AlphaBounds::default(),
            AlphaBounds::new(0.0, 1.0),
            AlphaBounds::new(0.5, 0.6),
        ] {
            let opt = optimize_ses(&series, bounds).unwrap();
            assert!(bounds.contains(opt.alpha), "alpha {} outside {:?}", opt.alpha, bounds);
        }
    }

    #[test]
    fn test_optimized_never_worse_than_start() {
        let series: Vec<f64> = (0..40)
            .map(|i| (i as f64 * 0.7).sin() * 3.0 + i as f64 * 0.1)
            .collect();
        let bounds = AlphaBounds::default();
        let opt = optimize_ses(&series, bounds).unwrap();

        // The search starts from the lower bound and only accepts decreases.
        let at_lower = ses_mse(&series, bounds.lower).unwrap();
        assert!(opt.mse <= at_lower + 1e-12);
    }

    #[test]
    fn test_optimized_forecast_matches_fixed_alpha() {
        let series = [2.0, 4.0, 3.0, 5.0, 4.0, 6.0];
        let opt = optimize_ses(&series, AlphaBounds::default()).unwrap();
        let forecast = optimized_ses_forecast(&series, AlphaBounds::default()).unwrap();
        assert_eq!(forecast, opt.forecast);
        assert_eq!(forecast, ses_forecast(&series, opt.alpha).unwrap());
    }

    #[test]
    fn test_trending_series_prefers_upper_bound() {
        // A steady ramp is fit best by the most responsive alpha available.
        let series: Vec<f64> = (0..30).map(|i| i as f64).collect();
        let opt = optimize_ses(&series, AlphaBounds::default()).unwrap();
        assert!((opt.alpha - 0.3).abs() < 1e-6, "alpha = {}", opt.alpha);
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let result = optimize_ses(&[1.0, 2.0], AlphaBounds::new(0.4, 0.2));
        assert!(matches!(result, Err(ForecastError::InvalidParameter { .. })));
    }
}
