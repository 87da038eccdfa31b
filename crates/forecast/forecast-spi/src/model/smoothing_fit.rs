//! Smoothing fit model

use serde::{Deserialize, Serialize};

/// Result of a single exponential smoothing pass over a series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothingFit {
    /// One-step-ahead forecast
    pub forecast: f64,
    /// Mean squared in-sample error, averaged over the full series length
    pub mse: f64,
}
