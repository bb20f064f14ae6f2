//! Criterion score value object (1-10 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Raw field score an evaluator gives one option on one criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CriterionScore(u8);

impl CriterionScore {
    /// Lowest allowed score.
    pub const MIN: u8 = 1;

    /// Highest allowed score; also the divisor of the weighted score.
    pub const MAX: u8 = 10;

    /// Creates a CriterionScore, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "criterion_score",
                i32::from(Self::MIN),
                i32::from(Self::MAX),
                i32::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Creates a CriterionScore, clamping to the valid range.
    pub fn clamped(value: u8) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the score as a fraction of the scale maximum.
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / f64::from(Self::MAX)
    }
}

impl TryFrom<u8> for CriterionScore {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<CriterionScore> for u8 {
    fn from(score: CriterionScore) -> Self {
        score.0
    }
}

impl fmt::Display for CriterionScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}
