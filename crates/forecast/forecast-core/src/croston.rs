//! Croston-family intermittent-demand models
//!
//! Croston's method smooths demand sizes and inter-demand intervals
//! separately and forecasts their ratio as the demand rate per period.
//!
//! - **Classic**: both parts smoothed at alpha = 0.1
//! - **SBA**: classic scaled by 0.95 to remove its positive bias (Syntetos & Boylan, 2005)
//! - **Optimized**: each part smoothed at its own MSE-minimizing alpha
//! - **TSB**: demand size times smoothed demand probability (Teunter, Syntetos & Babai, 2011)
//!
//! All four return a zero forecast for a series without any demand.

use forecast_spi::{AlphaBounds, Forecaster, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::intermittent::{demand, intervals, is_all_zero, probability};
use crate::smoothing::{optimized_ses_forecast, ses_forecast};
use crate::validation::require_non_empty;

/// Smoothing factor used by classic Croston and SBA
pub const CROSTON_ALPHA: f64 = 0.1;

/// Syntetos-Boylan bias correction factor
pub const SBA_FACTOR: f64 = 0.95;

/// `Some(zero forecast)` when the series has no demand at all
fn zero_demand(model: &str, series: &[f64], horizon: usize) -> Result<Option<Vec<f64>>> {
    require_non_empty(series)?;
    if is_all_zero(series) {
        debug!(model, n = series.len(), "series has no demand, returning zero forecast");
        return Ok(Some(vec![0.0; horizon]));
    }
    Ok(None)
}

// ============================================================================
// Croston Classic
// ============================================================================

/// Croston's method at fixed alpha
pub fn croston_classic(series: &[f64], horizon: usize) -> Result<Vec<f64>> {
    if let Some(zeros) = zero_demand("croston_classic", series, horizon)? {
        return Ok(zeros);
    }
    let demand_fcst = ses_forecast(&demand(series), CROSTON_ALPHA)?;
    let interval_fcst = ses_forecast(&intervals(series), CROSTON_ALPHA)?;
    Ok(vec![demand_fcst / interval_fcst; horizon])
}

/// Croston's method with fixed smoothing
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CrostonClassic;

impl Forecaster for CrostonClassic {
    fn forecast(&self, series: &[f64], horizon: usize) -> Result<Vec<f64>> {
        croston_classic(series, horizon)
    }

    fn name(&self) -> &str {
        "croston_classic"
    }
}

// ============================================================================
// Croston SBA
// ============================================================================

/// Syntetos-Boylan approximation: bias-corrected Croston
pub fn croston_sba(series: &[f64], horizon: usize) -> Result<Vec<f64>> {
    let classic = croston_classic(series, horizon)?;
    Ok(classic.into_iter().map(|v| SBA_FACTOR * v).collect())
}

/// Croston's method with the Syntetos-Boylan bias correction
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CrostonSba;

impl Forecaster for CrostonSba {
    fn forecast(&self, series: &[f64], horizon: usize) -> Result<Vec<f64>> {
        croston_sba(series, horizon)
    }

    fn name(&self) -> &str {
        "croston_sba"
    }
}

// ============================================================================
// Croston Optimized
// ============================================================================

/// Croston's method with alpha searched in the default bounds
pub fn croston_optimized(series: &[f64], horizon: usize) -> Result<Vec<f64>> {
    croston_optimized_with_bounds(series, horizon, AlphaBounds::default())
}

/// Croston's method with alpha searched in `bounds` for each part
pub fn croston_optimized_with_bounds(
    series: &[f64],
    horizon: usize,
    bounds: AlphaBounds,
) -> Result<Vec<f64>> {
    if let Some(zeros) = zero_demand("croston_optimized", series, horizon)? {
        return Ok(zeros);
    }
    let demand_fcst = optimized_ses_forecast(&demand(series), bounds)?;
    let interval_fcst = optimized_ses_forecast(&intervals(series), bounds)?;
    Ok(vec![demand_fcst / interval_fcst; horizon])
}

/// Croston's method with MSE-optimized smoothing factors
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CrostonOptimized {
    /// Search interval for both smoothing factors
    pub bounds: AlphaBounds,
}

impl CrostonOptimized {
    pub fn new(bounds: AlphaBounds) -> Self {
        Self { bounds }
    }
}

impl Forecaster for CrostonOptimized {
    fn forecast(&self, series: &[f64], horizon: usize) -> Result<Vec<f64>> {
        croston_optimized_with_bounds(series, horizon, self.bounds)
    }

    fn name(&self) -> &str {
        "croston_optimized"
    }
}

// ============================================================================
// TSB
// ============================================================================

/// Teunter-Syntetos-Babai: smoothed demand size times smoothed occurrence
///
/// Demand sizes are smoothed at `alpha_d`, the occurrence indicator over
/// every period at `alpha_p`.
pub fn tsb(series: &[f64], horizon: usize, alpha_d: f64, alpha_p: f64) -> Result<Vec<f64>> {
    if let Some(zeros) = zero_demand("tsb", series, horizon)? {
        return Ok(zeros);
    }
    let probability_fcst = ses_forecast(&probability(series), alpha_p)?;
    let demand_fcst = ses_forecast(&demand(series), alpha_d)?;
    Ok(vec![probability_fcst * demand_fcst; horizon])
}

/// TSB model with separate demand and probability smoothing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tsb {
    /// Smoothing factor for demand sizes
    pub alpha_d: f64,
    /// Smoothing factor for demand probability
    pub alpha_p: f64,
}

impl Tsb {
    pub fn new(alpha_d: f64, alpha_p: f64) -> Self {
        Self { alpha_d, alpha_p }
    }
}

impl Forecaster for Tsb {
    fn forecast(&self, series: &[f64], horizon: usize) -> Result<Vec<f64>> {
        tsb(series, horizon, self.alpha_d, self.alpha_p)
    }

    fn name(&self) -> &str {
        "tsb"
    }
}
