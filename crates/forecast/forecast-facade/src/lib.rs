//! Forecast Facade
//!
//! High-level API for the forecasting models. Re-exports all public types
//! from the forecast stack for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use forecast_api::*;

// Explicit re-exports for documentation
pub use forecast_api::prelude;

// Re-export model functions at root
pub use forecast_core::{
    adida, adida_with_bounds, croston_classic, croston_optimized, croston_optimized_with_bounds,
    croston_sba, historic_average, imapa, imapa_with_bounds, naive, optimize_ses,
    optimized_ses_forecast, random_walk_with_drift, seasonal_exponential_smoothing,
    seasonal_naive, seasonal_window_average, ses, ses_forecast, ses_forecast_mse, ses_mse, tsb,
    window_average,
};

// Re-export model types at root
pub use forecast_core::{
    Adida, CrostonClassic, CrostonOptimized, CrostonSba, HistoricAverage, Imapa, Naive,
    RandomWalkWithDrift, SeasonalExponentialSmoothing, SeasonalNaive, SeasonalWindowAverage, Ses,
    Tsb, WindowAverage,
};
