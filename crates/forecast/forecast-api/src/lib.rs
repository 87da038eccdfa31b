//! Forecast Consumer API
//!
//! Consumer configuration and dispatch for the forecasting models.
//!
//! This crate provides:
//! - A registry of model names ([`ModelKind`])
//! - Serde configuration types ([`ModelConfig`], [`ForecastRequest`])
//! - Name-based dispatch with default parameters ([`forecast`])
//! - Re-exports from SPI and core for convenience

mod config;
mod kind;

pub use config::{ForecastRequest, ModelConfig};
pub use kind::ModelKind;

// Re-export from core
pub use forecast_core::{
    aggregation, baseline, croston, intermittent, optimize, seasonal, smoothing,
    OptimizedSmoothing,
};

// Re-export traits from SPI
pub use forecast_spi::{AlphaBounds, ForecastError, Forecaster, Result, SmoothingFit};

use tracing::debug;

/// Forecast `series` with the model registered as `model`, at default parameters
///
/// # Example
///
/// ```rust
/// let forecast = forecast_api::forecast("naive", &[1.0, 2.0, 3.0], 2).unwrap();
/// assert_eq!(forecast, vec![3.0, 3.0]);
/// ```
pub fn forecast(model: &str, series: &[f64], horizon: usize) -> Result<Vec<f64>> {
    let kind: ModelKind = model.parse()?;
    debug!(model = kind.as_str(), horizon, n = series.len(), "forecast by name");
    ForecastRequest::new(horizon, kind.into()).run(series)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{forecast, ForecastRequest, ModelConfig, ModelKind};
    pub use forecast_core::{
        adida, croston_classic, croston_optimized, croston_sba, historic_average, imapa, naive,
        random_walk_with_drift, seasonal_exponential_smoothing, seasonal_naive,
        seasonal_window_average, ses, tsb, window_average,
    };
    pub use forecast_spi::{AlphaBounds, ForecastError, Forecaster, Result};
}
