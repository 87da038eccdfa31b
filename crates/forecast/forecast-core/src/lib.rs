//! Forecast Core
//!
//! Core implementations of the univariate forecasting models: the
//! exponential smoothing primitive and its alpha search, intermittent-demand
//! decomposition, temporal aggregation, and the baseline and seasonal
//! benchmarks.
//!
//! Every model is available as a pure function taking the series and the
//! horizon, and as a [`Forecaster`] struct carrying its parameters.
//!
//! ## Example
//!
//! ```rust
//! use forecast_core::{croston_sba, naive};
//!
//! let demand = [0.0, 0.0, 4.0, 0.0, 3.0, 0.0, 0.0, 5.0];
//! let forecast = croston_sba(&demand, 3).unwrap();
//! assert_eq!(forecast.len(), 3);
//!
//! assert_eq!(naive(&demand, 2).unwrap(), vec![5.0, 5.0]);
//! ```

pub mod aggregation;
pub mod baseline;
pub mod croston;
pub mod intermittent;
pub mod optimize;
pub mod seasonal;
pub mod smoothing;
mod validation;

// Re-export SPI traits for implementations
pub use forecast_spi::{AlphaBounds, ForecastError, Forecaster, Result, SmoothingFit};

// Re-export model functions and types
pub use aggregation::{adida, adida_with_bounds, imapa, imapa_with_bounds, Adida, Imapa};
pub use baseline::{
    historic_average, naive, random_walk_with_drift, ses, window_average, HistoricAverage, Naive,
    RandomWalkWithDrift, Ses, WindowAverage,
};
pub use croston::{
    croston_classic, croston_optimized, croston_optimized_with_bounds, croston_sba, tsb,
    CrostonClassic, CrostonOptimized, CrostonSba, Tsb,
};
pub use seasonal::{
    seasonal_exponential_smoothing, seasonal_naive, seasonal_window_average,
    SeasonalExponentialSmoothing, SeasonalNaive, SeasonalWindowAverage,
};
pub use smoothing::{
    optimize_ses, optimized_ses_forecast, ses_forecast, ses_forecast_mse, ses_mse,
    OptimizedSmoothing,
};
