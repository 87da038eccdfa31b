//! Serde configuration for building models

use forecast_core::{
    Adida, CrostonClassic, CrostonOptimized, CrostonSba, HistoricAverage, Imapa, Naive,
    RandomWalkWithDrift, SeasonalExponentialSmoothing, SeasonalNaive, SeasonalWindowAverage, Ses,
    Tsb, WindowAverage,
};
use forecast_spi::{AlphaBounds, ForecastError, Forecaster, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::kind::ModelKind;

fn default_alpha() -> f64 {
    0.1
}

fn default_one() -> usize {
    1
}

/// Model selection and parameters
///
/// Serialized with the model name in a `model` field next to its parameters:
///
/// ```json
/// { "model": "tsb", "alpha_d": 0.2, "alpha_p": 0.1 }
/// ```
///
/// Omitted parameters take their defaults: alpha 0.1, season length and
/// window size 1, alpha search bounds (0.1, 0.3).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ModelConfig {
    Ses {
        #[serde(default = "default_alpha")]
        alpha: f64,
    },
    HistoricAverage,
    Naive,
    RandomWalkWithDrift,
    WindowAverage {
        #[serde(default = "default_one")]
        window_size: usize,
    },
    SeasonalNaive {
        #[serde(default = "default_one")]
        season_length: usize,
    },
    SeasonalWindowAverage {
        #[serde(default = "default_one")]
        season_length: usize,
        #[serde(default = "default_one")]
        window_size: usize,
    },
    SeasonalExponentialSmoothing {
        #[serde(default = "default_one")]
        season_length: usize,
        #[serde(default = "default_alpha")]
        alpha: f64,
    },
    CrostonClassic,
    CrostonSba,
    CrostonOptimized {
        #[serde(default)]
        bounds: AlphaBounds,
    },
    Tsb {
        #[serde(default = "default_alpha")]
        alpha_d: f64,
        #[serde(default = "default_alpha")]
        alpha_p: f64,
    },
    Adida {
        #[serde(default)]
        bounds: AlphaBounds,
    },
    Imapa {
        #[serde(default)]
        bounds: AlphaBounds,
    },
}

impl ModelConfig {
    /// Configuration with every parameter at its default
    pub fn default_for(kind: ModelKind) -> Self {
        let alpha = default_alpha();
        let bounds = AlphaBounds::default();
        match kind {
            ModelKind::Ses => ModelConfig::Ses { alpha },
            ModelKind::HistoricAverage => ModelConfig::HistoricAverage,
            ModelKind::Naive => ModelConfig::Naive,
            ModelKind::RandomWalkWithDrift => ModelConfig::RandomWalkWithDrift,
            ModelKind::WindowAverage => ModelConfig::WindowAverage { window_size: 1 },
            ModelKind::SeasonalNaive => ModelConfig::SeasonalNaive { season_length: 1 },
            ModelKind::SeasonalWindowAverage => ModelConfig::SeasonalWindowAverage {
                season_length: 1,
                window_size: 1,
            },
            ModelKind::SeasonalExponentialSmoothing => ModelConfig::SeasonalExponentialSmoothing {
                season_length: 1,
                alpha,
            },
            ModelKind::CrostonClassic => ModelConfig::CrostonClassic,
            ModelKind::CrostonSba => ModelConfig::CrostonSba,
            ModelKind::CrostonOptimized => ModelConfig::CrostonOptimized { bounds },
            ModelKind::Tsb => ModelConfig::Tsb {
                alpha_d: alpha,
                alpha_p: alpha,
            },
            ModelKind::Adida => ModelConfig::Adida { bounds },
            ModelKind::Imapa => ModelConfig::Imapa { bounds },
        }
    }

    /// Which model this configures
    pub fn kind(&self) -> ModelKind {
        match self {
            ModelConfig::Ses { .. } => ModelKind::Ses,
            ModelConfig::HistoricAverage => ModelKind::HistoricAverage,
            ModelConfig::Naive => ModelKind::Naive,
            ModelConfig::RandomWalkWithDrift => ModelKind::RandomWalkWithDrift,
            ModelConfig::WindowAverage { .. } => ModelKind::WindowAverage,
            ModelConfig::SeasonalNaive { .. } => ModelKind::SeasonalNaive,
            ModelConfig::SeasonalWindowAverage { .. } => ModelKind::SeasonalWindowAverage,
            ModelConfig::SeasonalExponentialSmoothing { .. } => {
                ModelKind::SeasonalExponentialSmoothing
            }
            ModelConfig::CrostonClassic => ModelKind::CrostonClassic,
            ModelConfig::CrostonSba => ModelKind::CrostonSba,
            ModelConfig::CrostonOptimized { .. } => ModelKind::CrostonOptimized,
            ModelConfig::Tsb { .. } => ModelKind::Tsb,
            ModelConfig::Adida { .. } => ModelKind::Adida,
            ModelConfig::Imapa { .. } => ModelKind::Imapa,
        }
    }

    /// Check parameter ranges
    ///
    /// The model functions trust their parameters; this is the place where
    /// configuration read from outside is range-checked.
    pub fn validate(&self) -> Result<()> {
        match *self {
            ModelConfig::Ses { alpha } => check_alpha("alpha", alpha),
            ModelConfig::WindowAverage { window_size } => check_count("window_size", window_size),
            ModelConfig::SeasonalNaive { season_length } => {
                check_count("season_length", season_length)
            }
            ModelConfig::SeasonalWindowAverage {
                season_length,
                window_size,
            } => {
                check_count("season_length", season_length)?;
                check_count("window_size", window_size)
            }
            ModelConfig::SeasonalExponentialSmoothing {
                season_length,
                alpha,
            } => {
                check_count("season_length", season_length)?;
                check_alpha("alpha", alpha)
            }
            ModelConfig::Tsb { alpha_d, alpha_p } => {
                check_alpha("alpha_d", alpha_d)?;
                check_alpha("alpha_p", alpha_p)
            }
            ModelConfig::CrostonOptimized { bounds }
            | ModelConfig::Adida { bounds }
            | ModelConfig::Imapa { bounds } => check_bounds(bounds),
            ModelConfig::HistoricAverage
            | ModelConfig::Naive
            | ModelConfig::RandomWalkWithDrift
            | ModelConfig::CrostonClassic
            | ModelConfig::CrostonSba => Ok(()),
        }
    }

    /// Validate and build the configured model
    pub fn build(&self) -> Result<Box<dyn Forecaster>> {
        self.validate()?;
        let model: Box<dyn Forecaster> = match *self {
            ModelConfig::Ses { alpha } => Box::new(Ses::new(alpha)),
            ModelConfig::HistoricAverage => Box::new(HistoricAverage),
            ModelConfig::Naive => Box::new(Naive),
            ModelConfig::RandomWalkWithDrift => Box::new(RandomWalkWithDrift),
            ModelConfig::WindowAverage { window_size } => Box::new(WindowAverage::new(window_size)),
            ModelConfig::SeasonalNaive { season_length } => {
                Box::new(SeasonalNaive::new(season_length))
            }
            ModelConfig::SeasonalWindowAverage {
                season_length,
                window_size,
            } => Box::new(SeasonalWindowAverage::new(season_length, window_size)),
            ModelConfig::SeasonalExponentialSmoothing {
                season_length,
                alpha,
            } => Box::new(SeasonalExponentialSmoothing::new(season_length, alpha)),
            ModelConfig::CrostonClassic => Box::new(CrostonClassic),
            ModelConfig::CrostonSba => Box::new(CrostonSba),
            ModelConfig::CrostonOptimized { bounds } => Box::new(CrostonOptimized::new(bounds)),
            ModelConfig::Tsb { alpha_d, alpha_p } => Box::new(Tsb::new(alpha_d, alpha_p)),
            ModelConfig::Adida { bounds } => Box::new(Adida::new(bounds)),
            ModelConfig::Imapa { bounds } => Box::new(Imapa::new(bounds)),
        };
        debug!(model = model.name(), "built forecaster");
        Ok(model)
    }
}

impl From<ModelKind> for ModelConfig {
    fn from(kind: ModelKind) -> Self {
        Self::default_for(kind)
    }
}

fn check_alpha(name: &str, alpha: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(ForecastError::invalid_parameter(
            name,
            format!("must be within [0, 1], got {alpha}"),
        ));
    }
    Ok(())
}

fn check_count(name: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(ForecastError::invalid_parameter(name, "must be at least 1"));
    }
    Ok(())
}

fn check_bounds(bounds: AlphaBounds) -> Result<()> {
    if !bounds.is_valid() || bounds.lower < 0.0 || bounds.upper > 1.0 {
        return Err(ForecastError::invalid_parameter(
            "bounds",
            format!(
                "must satisfy 0 <= lower <= upper <= 1, got ({}, {})",
                bounds.lower, bounds.upper
            ),
        ));
    }
    Ok(())
}

/// A horizon plus the model to produce it with
///
/// The model fields sit at the top level of the request:
///
/// ```json
/// { "horizon": 12, "model": "seasonal_naive", "season_length": 4 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastRequest {
    /// Number of steps to forecast
    pub horizon: usize,
    /// Model selection and parameters
    #[serde(flatten)]
    pub model: ModelConfig,
}

impl ForecastRequest {
    pub fn new(horizon: usize, model: ModelConfig) -> Self {
        Self { horizon, model }
    }

    /// Parse a request from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the configured model and forecast `series`
    pub fn run(&self, series: &[f64]) -> Result<Vec<f64>> {
        let model = self.model.build()?;
        model.forecast(series, self.horizon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_defaults() {
        let config: ModelConfig = serde_json::from_str(r#"{"model": "ses"}"#).unwrap();
        assert_eq!(config, ModelConfig::Ses { alpha: 0.1 });

        let config: ModelConfig =
            serde_json::from_str(r#"{"model": "croston_optimized"}"#).unwrap();
        assert_eq!(
            config,
            ModelConfig::CrostonOptimized {
                bounds: AlphaBounds::default()
            }
        );
    }

    #[test]
    fn test_parse_with_parameters() {
        let config: ModelConfig = serde_json::from_str(
            r#"{"model": "seasonal_window_average", "season_length": 7, "window_size": 4}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            ModelConfig::SeasonalWindowAverage {
                season_length: 7,
                window_size: 4
            }
        );

        let config: ModelConfig = serde_json::from_str(
            r#"{"model": "adida", "bounds": {"lower": 0.05, "upper": 0.5}}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            ModelConfig::Adida {
                bounds: AlphaBounds::new(0.05, 0.5)
            }
        );
    }

    #[test]
    fn test_serialize_unit_variant() {
        let json = serde_json::to_string(&ModelConfig::Naive).unwrap();
        assert_eq!(json, r#"{"model":"naive"}"#);
    }

    #[test]
    fn test_unknown_model_name_fails() {
        assert!(serde_json::from_str::<ModelConfig>(r#"{"model": "arima"}"#).is_err());
    }

    #[test]
    fn test_kind_matches_default_for() {
        for kind in ModelKind::all() {
            assert_eq!(ModelConfig::default_for(*kind).kind(), *kind);
        }
    }

    #[test]
    fn test_defaults_validate() {
        for kind in ModelKind::all() {
            assert!(ModelConfig::from(*kind).validate().is_ok(), "{kind}");
        }
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let invalid = [
            ModelConfig::Ses { alpha: 1.5 },
            ModelConfig::Ses { alpha: f64::NAN },
            ModelConfig::WindowAverage { window_size: 0 },
            ModelConfig::SeasonalNaive { season_length: 0 },
            ModelConfig::SeasonalWindowAverage {
                season_length: 4,
                window_size: 0,
            },
            ModelConfig::SeasonalExponentialSmoothing {
                season_length: 4,
                alpha: -0.1,
            },
            ModelConfig::Tsb {
                alpha_d: 0.1,
                alpha_p: 2.0,
            },
            ModelConfig::Adida {
                bounds: AlphaBounds::new(0.3, 0.1),
            },
            ModelConfig::Imapa {
                bounds: AlphaBounds::new(0.1, 1.3),
            },
        ];
        for config in invalid {
            assert!(
                matches!(
                    config.validate(),
                    Err(ForecastError::InvalidParameter { .. })
                ),
                "{config:?}"
            );
            assert!(config.build().is_err());
        }
    }

    #[test]
    fn test_build_names() {
        for kind in ModelKind::all() {
            let model = ModelConfig::from(*kind).build().unwrap();
            assert_eq!(model.name(), kind.as_str());
        }
    }

    #[test]
    fn test_request_from_json() {
        let request =
            ForecastRequest::from_json(r#"{"horizon": 3, "model": "tsb", "alpha_d": 0.5, "alpha_p": 0.5}"#)
                .unwrap();
        assert_eq!(request.horizon, 3);
        assert_eq!(
            request.model,
            ModelConfig::Tsb {
                alpha_d: 0.5,
                alpha_p: 0.5
            }
        );
        let forecast = request.run(&[0.0, 2.0, 0.0, 4.0]).unwrap();
        assert_eq!(forecast, vec![1.875; 3]);
    }

    #[test]
    fn test_request_invalid_json() {
        let err = ForecastRequest::from_json(r#"{"horizon": -1, "model": "naive"}"#).unwrap_err();
        assert!(matches!(err, ForecastError::Config(_)));
    }
}
