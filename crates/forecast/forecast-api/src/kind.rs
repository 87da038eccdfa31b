//! Model registry

use std::fmt;
use std::str::FromStr;

use forecast_spi::ForecastError;
use serde::{Deserialize, Serialize};

/// Every model the stack can build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Ses,
    HistoricAverage,
    Naive,
    RandomWalkWithDrift,
    WindowAverage,
    SeasonalNaive,
    SeasonalWindowAverage,
    SeasonalExponentialSmoothing,
    CrostonClassic,
    CrostonSba,
    CrostonOptimized,
    Tsb,
    Adida,
    Imapa,
}

impl ModelKind {
    const ALL: [ModelKind; 14] = [
        ModelKind::Ses,
        ModelKind::HistoricAverage,
        ModelKind::Naive,
        ModelKind::RandomWalkWithDrift,
        ModelKind::WindowAverage,
        ModelKind::SeasonalNaive,
        ModelKind::SeasonalWindowAverage,
        ModelKind::SeasonalExponentialSmoothing,
        ModelKind::CrostonClassic,
        ModelKind::CrostonSba,
        ModelKind::CrostonOptimized,
        ModelKind::Tsb,
        ModelKind::Adida,
        ModelKind::Imapa,
    ];

    /// All registered models, in a stable order
    pub fn all() -> &'static [ModelKind] {
        &Self::ALL
    }

    /// Registry name, as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Ses => "ses",
            ModelKind::HistoricAverage => "historic_average",
            ModelKind::Naive => "naive",
            ModelKind::RandomWalkWithDrift => "random_walk_with_drift",
            ModelKind::WindowAverage => "window_average",
            ModelKind::SeasonalNaive => "seasonal_naive",
            ModelKind::SeasonalWindowAverage => "seasonal_window_average",
            ModelKind::SeasonalExponentialSmoothing => "seasonal_exponential_smoothing",
            ModelKind::CrostonClassic => "croston_classic",
            ModelKind::CrostonSba => "croston_sba",
            ModelKind::CrostonOptimized => "croston_optimized",
            ModelKind::Tsb => "tsb",
            ModelKind::Adida => "adida",
            ModelKind::Imapa => "imapa",
        }
    }

    /// Whether the model is meant for intermittent demand
    pub fn is_intermittent(&self) -> bool {
        matches!(
            self,
            ModelKind::CrostonClassic
                | ModelKind::CrostonSba
                | ModelKind::CrostonOptimized
                | ModelKind::Tsb
                | ModelKind::Adida
                | ModelKind::Imapa
        )
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| ForecastError::UnknownModel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_every_model_once() {
        let names: std::collections::HashSet<_> =
            ModelKind::all().iter().map(|k| k.as_str()).collect();
        assert_eq!(names.len(), 14);
    }

    #[test]
    fn test_display_and_parse_agree() {
        for kind in ModelKind::all() {
            assert_eq!(kind.to_string().parse::<ModelKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_dashes() {
        assert_eq!(
            "Croston-SBA".parse::<ModelKind>().unwrap(),
            ModelKind::CrostonSba
        );
        assert_eq!(" naive ".parse::<ModelKind>().unwrap(), ModelKind::Naive);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "arima".parse::<ModelKind>().unwrap_err();
        assert_eq!(err, ForecastError::UnknownModel("arima".to_string()));
    }

    #[test]
    fn test_serde_name_matches_registry_name() {
        for kind in ModelKind::all() {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_intermittent_models() {
        let intermittent: Vec<_> = ModelKind::all()
            .iter()
            .filter(|k| k.is_intermittent())
            .map(|k| k.as_str())
            .collect();
        assert_eq!(
            intermittent,
            vec![
                "croston_classic",
                "croston_sba",
                "croston_optimized",
                "tsb",
                "adida",
                "imapa"
            ]
        );
    }
}
