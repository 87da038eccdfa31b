//! Temporal aggregation models for intermittent demand
//!
//! Summing an intermittent series over buckets of roughly one mean
//! inter-demand interval removes most of its zeros. The aggregated series
//! is forecast with optimized exponential smoothing and the result is
//! divided back down to a per-period rate.
//!
//! - **ADIDA**: a single aggregation level, the rounded mean interval
//!   (Nikolopoulos et al., 2011)
//! - **IMAPA**: the mean of the ADIDA-style forecasts at every level from 1
//!   up to the rounded mean interval (Petropoulos & Kourentzes, 2015)

use forecast_spi::{AlphaBounds, Forecaster, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::intermittent::{aggregation_level, chunk_sums, is_all_zero};
use crate::smoothing::optimized_ses_forecast;
use crate::validation::require_non_empty;

/// Per-period forecast from the series aggregated at `level`
fn disaggregated_forecast(series: &[f64], level: usize, bounds: AlphaBounds) -> Result<f64> {
    let sums = chunk_sums(series, level)?;
    let forecast = optimized_ses_forecast(&sums, bounds)?;
    Ok(forecast / level as f64)
}

/// Aggregation level, or `None` when the series carries no demand
fn level_for(model: &str, series: &[f64]) -> Result<Option<usize>> {
    require_non_empty(series)?;
    if is_all_zero(series) {
        debug!(model, n = series.len(), "series has no demand, returning zero forecast");
        return Ok(None);
    }
    Ok(aggregation_level(series))
}

// ============================================================================
// ADIDA
// ============================================================================

/// Aggregate-disaggregate intermittent demand approach
pub fn adida(series: &[f64], horizon: usize) -> Result<Vec<f64>> {
    adida_with_bounds(series, horizon, AlphaBounds::default())
}

/// ADIDA with the smoothing factor searched in `bounds`
pub fn adida_with_bounds(series: &[f64], horizon: usize, bounds: AlphaBounds) -> Result<Vec<f64>> {
    let Some(level) = level_for("adida", series)? else {
        return Ok(vec![0.0; horizon]);
    };
    debug!(level, n = series.len(), "adida aggregation level");

    let forecast = disaggregated_forecast(series, level, bounds)?;
    Ok(vec![forecast; horizon])
}

/// ADIDA model
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Adida {
    /// Search interval for the smoothing factor
    pub bounds: AlphaBounds,
}

impl Adida {
    pub fn new(bounds: AlphaBounds) -> Self {
        Self { bounds }
    }
}

impl Forecaster for Adida {
    fn forecast(&self, series: &[f64], horizon: usize) -> Result<Vec<f64>> {
        adida_with_bounds(series, horizon, self.bounds)
    }

    fn name(&self) -> &str {
        "adida"
    }
}

// ============================================================================
// IMAPA
// ============================================================================

/// Intermittent multiple aggregation prediction algorithm
pub fn imapa(series: &[f64], horizon: usize) -> Result<Vec<f64>> {
    imapa_with_bounds(series, horizon, AlphaBounds::default())
}

/// IMAPA with the smoothing factor searched in `bounds` at every level
pub fn imapa_with_bounds(series: &[f64], horizon: usize, bounds: AlphaBounds) -> Result<Vec<f64>> {
    let Some(max_level) = level_for("imapa", series)? else {
        return Ok(vec![0.0; horizon]);
    };
    debug!(max_level, n = series.len(), "imapa aggregation levels");

    let forecasts = (1..=max_level)
        .map(|level| disaggregated_forecast(series, level, bounds))
        .collect::<Result<Vec<f64>>>()?;
    let forecast = forecasts.iter().sum::<f64>() / forecasts.len() as f64;

    Ok(vec![forecast; horizon])
}

/// IMAPA model
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Imapa {
    /// Search interval for the smoothing factor
    pub bounds: AlphaBounds,
}

impl Imapa {
    pub fn new(bounds: AlphaBounds) -> Self {
        Self { bounds }
    }
}

impl Forecaster for Imapa {
    fn forecast(&self, series: &[f64], horizon: usize) -> Result<Vec<f64>> {
        imapa_with_bounds(series, horizon, self.bounds)
    }

    fn name(&self) -> &str {
        "imapa"
    }
}
