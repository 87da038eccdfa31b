//! Seasonal forecasting models
//!
//! Each model produces one value per seasonal phase and cycles through those
//! values across the horizon.
//!
//! - **Seasonal window average**: per-phase mean over the last `window_size` seasons
//! - **Seasonal naive**: the last observed season, repeated
//! - **Seasonal exponential smoothing**: per-phase smoothing of the strided sub-series

use forecast_spi::{Forecaster, Result};
use serde::{Deserialize, Serialize};

use crate::smoothing::ses_forecast;
use crate::validation::{insufficient_history, require_non_empty, require_positive};

fn cycle(phases: &[f64], horizon: usize) -> Vec<f64> {
    (0..horizon).map(|i| phases[i % phases.len()]).collect()
}

// ============================================================================
// Seasonal Window Average
// ============================================================================

/// Per-phase average over the last `window_size` seasons
///
/// The last `season_length * window_size` observations are bucketed by
/// position modulo `season_length`. The trailing block always spans whole
/// seasons, so bucket 0 holds the phase that follows the last observation.
/// Returns a NaN-filled forecast when the series is shorter than that block.
pub fn seasonal_window_average(
    series: &[f64],
    horizon: usize,
    season_length: usize,
    window_size: usize,
) -> Result<Vec<f64>> {
    require_non_empty(series)?;
    require_positive("season_length", season_length)?;
    require_positive("window_size", window_size)?;

    let min_samples = season_length * window_size;
    if series.len() < min_samples {
        return Ok(insufficient_history(
            "seasonal_window_average",
            min_samples,
            series.len(),
            horizon,
        ));
    }

    let mut season_avgs = vec![0.0; season_length];
    let tail = &series[series.len() - min_samples..];
    for (i, &value) in tail.iter().enumerate() {
        season_avgs[i % season_length] += value / window_size as f64;
    }

    Ok(cycle(&season_avgs, horizon))
}

/// Seasonal moving average over whole seasons
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalWindowAverage {
    /// Number of observations per seasonal cycle
    pub season_length: usize,
    /// Number of trailing seasons averaged
    pub window_size: usize,
}

impl SeasonalWindowAverage {
    pub fn new(season_length: usize, window_size: usize) -> Self {
        Self {
            season_length,
            window_size,
        }
    }
}

impl Forecaster for SeasonalWindowAverage {
    fn forecast(&self, series: &[f64], horizon: usize) -> Result<Vec<f64>> {
        seasonal_window_average(series, horizon, self.season_length, self.window_size)
    }

    fn name(&self) -> &str {
        "seasonal_window_average"
    }
}

// ============================================================================
// Seasonal Naive
// ============================================================================

/// Repeat the last observed season
pub fn seasonal_naive(series: &[f64], horizon: usize, season_length: usize) -> Result<Vec<f64>> {
    seasonal_window_average(series, horizon, season_length, 1)
}

/// Forecasts each phase with its value one season ago
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalNaive {
    /// Number of observations per seasonal cycle
    pub season_length: usize,
}

impl SeasonalNaive {
    pub fn new(season_length: usize) -> Self {
        Self { season_length }
    }
}

impl Forecaster for SeasonalNaive {
    fn forecast(&self, series: &[f64], horizon: usize) -> Result<Vec<f64>> {
        seasonal_naive(series, horizon, self.season_length)
    }

    fn name(&self) -> &str {
        "seasonal_naive"
    }
}

// ============================================================================
// Seasonal Exponential Smoothing
// ============================================================================

/// Smooth every seasonal phase independently at a fixed `alpha`
///
/// Phase `p` is the sub-series `series[p], series[p + s], series[p + 2s], ...`
/// with phases counted from the start of the series. Returns a NaN-filled
/// forecast when the series does not cover one full season.
pub fn seasonal_exponential_smoothing(
    series: &[f64],
    horizon: usize,
    season_length: usize,
    alpha: f64,
) -> Result<Vec<f64>> {
    require_non_empty(series)?;
    require_positive("season_length", season_length)?;

    if series.len() < season_length {
        return Ok(insufficient_history(
            "seasonal_exponential_smoothing",
            season_length,
            series.len(),
            horizon,
        ));
    }

    let season_vals = (0..season_length)
        .map(|phase| {
            let strided: Vec<f64> = series
                .iter()
                .skip(phase)
                .step_by(season_length)
                .copied()
                .collect();
            ses_forecast(&strided, alpha)
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok(cycle(&season_vals, horizon))
}

/// Simple exponential smoothing applied per seasonal phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalExponentialSmoothing {
    /// Number of observations per seasonal cycle
    pub season_length: usize,
    /// Smoothing factor in [0, 1]
    pub alpha: f64,
}

impl SeasonalExponentialSmoothing {
    pub fn new(season_length: usize, alpha: f64) -> Self {
        Self {
            season_length,
            alpha,
        }
    }
}

impl Forecaster for SeasonalExponentialSmoothing {
    fn forecast(&self, series: &[f64], horizon: usize) -> Result<Vec<f64>> {
        seasonal_exponential_smoothing(series, horizon, self.season_length, self.alpha)
    }

    fn name(&self) -> &str {
        "seasonal_exponential_smoothing"
    }
}
