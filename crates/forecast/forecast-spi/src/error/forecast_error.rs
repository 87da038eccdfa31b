//! Forecast error types

use thiserror::Error;

/// Errors that can occur during forecasting operations
///
/// Insufficient history for window and seasonal models is not an error:
/// those models return a NaN-filled forecast instead. The variants here
/// cover degenerate input that has no meaningful forecast at all.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// The input series has no observations
    #[error("Empty series: at least one observation is required")]
    EmptySeries,

    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    NumericalError(String),

    /// Model name not present in the registry
    #[error("Unknown model: {0}")]
    UnknownModel(String),

    /// Model configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ForecastError {
    /// Shorthand for [`ForecastError::InvalidParameter`]
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
