//! Baseline forecasting models
//!
//! Flat and drift benchmarks that every other model should beat:
//!
//! - **SES**: simple exponential smoothing at a fixed alpha
//! - **Historic average**: mean of the full history
//! - **Naive**: last observation
//! - **Random walk with drift**: straight line through the first and last observations
//! - **Window average**: mean of the most recent observations

use forecast_spi::{ForecastError, Forecaster, Result};
use serde::{Deserialize, Serialize};

use crate::smoothing::ses_forecast;
use crate::validation::{insufficient_history, require_non_empty, require_positive};

// ============================================================================
// Simple Exponential Smoothing
// ============================================================================

/// Flat forecast from the smoothing recursion at a fixed `alpha`
pub fn ses(series: &[f64], horizon: usize, alpha: f64) -> Result<Vec<f64>> {
    let level = ses_forecast(series, alpha)?;
    Ok(vec![level; horizon])
}

/// Simple exponential smoothing with a fixed smoothing factor
///
/// # Example
///
/// ```rust
/// use forecast_core::baseline::Ses;
/// use forecast_core::Forecaster;
///
/// let model = Ses::new(0.5);
/// let forecast = model.forecast(&[10.0, 12.0, 14.0], 2).unwrap();
/// assert_eq!(forecast, vec![12.5, 12.5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ses {
    /// Smoothing factor in [0, 1]
    pub alpha: f64,
}

impl Ses {
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }
}

impl Forecaster for Ses {
    fn forecast(&self, series: &[f64], horizon: usize) -> Result<Vec<f64>> {
        ses(series, horizon, self.alpha)
    }

    fn name(&self) -> &str {
        "ses"
    }
}

// ============================================================================
// Historic Average
// ============================================================================

/// Mean of the whole history, repeated
pub fn historic_average(series: &[f64], horizon: usize) -> Result<Vec<f64>> {
    require_non_empty(series)?;
    let mean = series.iter().sum::<f64>() / series.len() as f64;
    Ok(vec![mean; horizon])
}

/// Forecasts the mean of the full history
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricAverage;

impl Forecaster for HistoricAverage {
    fn forecast(&self, series: &[f64], horizon: usize) -> Result<Vec<f64>> {
        historic_average(series, horizon)
    }

    fn name(&self) -> &str {
        "historic_average"
    }
}

// ============================================================================
// Naive
// ============================================================================

/// Last observation, repeated
pub fn naive(series: &[f64], horizon: usize) -> Result<Vec<f64>> {
    let last = series.last().copied().ok_or(ForecastError::EmptySeries)?;
    Ok(vec![last; horizon])
}

/// Forecasts the last observed value
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Naive;

impl Forecaster for Naive {
    fn forecast(&self, series: &[f64], horizon: usize) -> Result<Vec<f64>> {
        naive(series, horizon)
    }

    fn name(&self) -> &str {
        "naive"
    }
}

// ============================================================================
// Random Walk with Drift
// ============================================================================

/// Extrapolate the average step between the first and last observations
///
/// `forecast[i] = last + slope * (i + 1)` with `slope = (last - first) / (n - 1)`.
///
/// # Errors
///
/// `InsufficientData` for fewer than two observations, where no slope exists.
pub fn random_walk_with_drift(series: &[f64], horizon: usize) -> Result<Vec<f64>> {
    let n = series.len();
    if n < 2 {
        return Err(ForecastError::InsufficientData {
            required: 2,
            actual: n,
        });
    }

    let first = series[0];
    let last = series[n - 1];
    let slope = (last - first) / (n - 1) as f64;

    Ok((1..=horizon).map(|step| last + slope * step as f64).collect())
}

/// Naive forecast plus the average historical drift
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RandomWalkWithDrift;

impl Forecaster for RandomWalkWithDrift {
    fn forecast(&self, series: &[f64], horizon: usize) -> Result<Vec<f64>> {
        random_walk_with_drift(series, horizon)
    }

    fn name(&self) -> &str {
        "random_walk_with_drift"
    }
}

// ============================================================================
// Window Average
// ============================================================================

/// Mean of the last `window_size` observations, repeated
///
/// Returns a NaN-filled forecast when the series is shorter than the window.
pub fn window_average(series: &[f64], horizon: usize, window_size: usize) -> Result<Vec<f64>> {
    require_non_empty(series)?;
    require_positive("window_size", window_size)?;

    if series.len() < window_size {
        return Ok(insufficient_history(
            "window_average",
            window_size,
            series.len(),
            horizon,
        ));
    }

    let window = &series[series.len() - window_size..];
    let mean = window.iter().sum::<f64>() / window_size as f64;
    Ok(vec![mean; horizon])
}

/// Moving average over a trailing window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowAverage {
    /// Number of trailing observations averaged
    pub window_size: usize,
}

impl WindowAverage {
    pub fn new(window_size: usize) -> Self {
        Self { window_size }
    }
}

impl Forecaster for WindowAverage {
    fn forecast(&self, series: &[f64], horizon: usize) -> Result<Vec<f64>> {
        window_average(series, horizon, self.window_size)
    }

    fn name(&self) -> &str {
        "window_average"
    }
}
