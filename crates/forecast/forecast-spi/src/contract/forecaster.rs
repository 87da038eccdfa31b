//! Forecaster trait for univariate models

use crate::error::Result;

/// A univariate forecasting model
///
/// Implementations are stateless: every call to [`Forecaster::forecast`]
/// works only from the series it is given, so a single instance can be
/// shared across threads and series.
pub trait Forecaster: Send + Sync {
    /// Forecast `horizon` steps past the end of `series`
    ///
    /// The returned vector always has length `horizon`. Models that need
    /// more history than `series` provides return a NaN-filled vector.
    fn forecast(&self, series: &[f64], horizon: usize) -> Result<Vec<f64>>;

    /// Name of this model
    fn name(&self) -> &str;
}
