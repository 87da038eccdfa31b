//! Forecast Service Provider Interface
//!
//! Defines the forecaster contract, the value types shared by the smoothing
//! primitives, and the error type used across the model stack.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::Forecaster;
pub use error::{ForecastError, Result};
pub use model::{AlphaBounds, SmoothingFit};
