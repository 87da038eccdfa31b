//! Smoothing factor search interval

use serde::{Deserialize, Serialize};

/// Closed interval searched when optimizing a smoothing factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlphaBounds {
    /// Smallest admissible alpha
    pub lower: f64,
    /// Largest admissible alpha
    pub upper: f64,
}

impl AlphaBounds {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Whether `alpha` lies inside the interval (inclusive)
    pub fn contains(&self, alpha: f64) -> bool {
        self.lower <= alpha && alpha <= self.upper
    }

    /// Clamp `alpha` into the interval
    pub fn clamp(&self, alpha: f64) -> f64 {
        alpha.max(self.lower).min(self.upper)
    }

    /// Whether the interval is ordered and finite
    pub fn is_valid(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite() && self.lower <= self.upper
    }
}

impl Default for AlphaBounds {
    fn default() -> Self {
        Self {
            lower: 0.1,
            upper: 0.3,
        }
    }
}

impl From<(f64, f64)> for AlphaBounds {
    fn from((lower, upper): (f64, f64)) -> Self {
        Self { lower, upper }
    }
}
