//! Input checks shared by the models

use forecast_spi::{ForecastError, Result};
use tracing::debug;

/// Fail with `EmptySeries` when there is nothing to forecast from
pub(crate) fn require_non_empty(series: &[f64]) -> Result<()> {
    if series.is_empty() {
        return Err(ForecastError::EmptySeries);
    }
    Ok(())
}

/// Fail with `InvalidParameter` when a window or season parameter is zero
pub(crate) fn require_positive(name: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(ForecastError::invalid_parameter(name, "must be at least 1"));
    }
    Ok(())
}

/// Forecast signalling that the history is too short for the model
pub(crate) fn insufficient_history(
    model: &str,
    required: usize,
    actual: usize,
    horizon: usize,
) -> Vec<f64> {
    debug!(model, required, actual, "insufficient history, returning NaN forecast");
    vec![f64::NAN; horizon]
}
