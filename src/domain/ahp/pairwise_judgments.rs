//! Pairwise Judgments - the three slider inputs of the water-supply decision.

use serde::{Deserialize, Serialize};

use super::{AhpError, ComparisonMatrix};
use crate::domain::foundation::Judgment;

/// The decision-maker's three pairwise preferences over
/// Cost, Availability and Accessibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairwiseJudgments {
    #[serde(default)]
    pub cost_vs_availability: Judgment,
    #[serde(default)]
    pub cost_vs_accessibility: Judgment,
    #[serde(default)]
    pub availability_vs_accessibility: Judgment,
}

impl PairwiseJudgments {
    /// Creates judgments from the three slider positions.
    pub fn new(
        cost_vs_availability: Judgment,
        cost_vs_accessibility: Judgment,
        availability_vs_accessibility: Judgment,
    ) -> Self {
        Self {
            cost_vs_availability,
            cost_vs_accessibility,
            availability_vs_accessibility,
        }
    }

    /// Arranges the judgments into a 3x3 reciprocal matrix.
    ///
    /// Rows and columns follow `Criterion::ALL`.
    pub fn to_matrix(&self) -> Result<ComparisonMatrix, AhpError> {
        ComparisonMatrix::from_upper_triangle(
            3,
            &[
                self.cost_vs_availability.ratio(),
                self.cost_vs_accessibility.ratio(),
                self.availability_vs_accessibility.ratio(),
            ],
        )
    }
}
