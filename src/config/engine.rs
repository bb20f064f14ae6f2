//! AHP engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ahp::{
    EngineOptions, WeightMethod, CONSISTENCY_THRESHOLD, DEFAULT_RECIPROCITY_TOLERANCE,
};

/// Engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// CR strictly below this value counts as consistent
    #[serde(default = "default_threshold")]
    pub consistency_threshold: f64,

    /// Allowed deviation of `a[i][j] * a[j][i]` from 1
    #[serde(default = "default_tolerance")]
    pub reciprocity_tolerance: f64,

    #[serde(default)]
    pub weight_method: WeightMethod,

    #[serde(default = "default_eigen_epsilon")]
    pub eigen_epsilon: f64,

    #[serde(default = "default_eigen_max_iterations")]
    pub eigen_max_iterations: usize,
}

impl EngineConfig {
    /// Numerical options for `AhpEngine::new`.
    pub fn to_options(&self) -> EngineOptions {
        EngineOptions {
            weight_method: self.weight_method,
            eigen_epsilon: self.eigen_epsilon,
            eigen_max_iterations: self.eigen_max_iterations,
        }
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.consistency_threshold > 0.0 && self.consistency_threshold <= 1.0) {
            return Err(ValidationError::InvalidThreshold(self.consistency_threshold));
        }
        if !(self.reciprocity_tolerance.is_finite() && self.reciprocity_tolerance > 0.0) {
            return Err(ValidationError::InvalidTolerance(self.reciprocity_tolerance));
        }
        if !(self.eigen_epsilon.is_finite() && self.eigen_epsilon >= 0.0) {
            return Err(ValidationError::InvalidEpsilon(self.eigen_epsilon));
        }
        if self.eigen_max_iterations == 0 {
            return Err(ValidationError::InvalidIterationCap);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            consistency_threshold: default_threshold(),
            reciprocity_tolerance: default_tolerance(),
            weight_method: WeightMethod::default(),
            eigen_epsilon: default_eigen_epsilon(),
            eigen_max_iterations: default_eigen_max_iterations(),
        }
    }
}

fn default_threshold() -> f64 {
    CONSISTENCY_THRESHOLD
}

fn default_tolerance() -> f64 {
    DEFAULT_RECIPROCITY_TOLERANCE
}

fn default_eigen_epsilon() -> f64 {
    EngineOptions::default().eigen_epsilon
}

fn default_eigen_max_iterations() -> usize {
    EngineOptions::default().eigen_max_iterations
}
