//! Decision Outcome - everything computed for one evaluation request.

use serde::{Deserialize, Serialize};

use crate::domain::ahp::AhpResult;
use crate::domain::analysis::{
    ConsistencyVerdict, CostComparison, DominatedOption, OptionSynthesis, ScoredOption,
};
use crate::domain::foundation::Percentage;

/// Where the evaluation took place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSummary {
    pub key: String,
    pub district: String,
    pub city: String,
    pub sector: String,
}

/// Result of evaluating supply options for one zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionOutcome {
    pub zone: ZoneSummary,
    /// Criterion labels in matrix order.
    pub criteria: Vec<String>,
    pub ahp: AhpResult,
    pub consistency_threshold: f64,
    pub verdict: ConsistencyVerdict,
    /// Options best first.
    pub ranking: Vec<ScoredOption>,
    pub dominated: Vec<DominatedOption>,
    pub cost_comparison: Option<CostComparison>,
    /// Network versus self-supply notes; empty off the water-supply criteria.
    #[serde(default)]
    pub synthesis: Vec<OptionSynthesis>,
}

impl DecisionOutcome {
    /// Returns the top-ranked option.
    pub fn recommendation(&self) -> Option<&ScoredOption> {
        self.ranking.first()
    }

    /// Returns `(label, weight)` pairs in matrix order.
    pub fn labelled_weights(&self) -> impl Iterator<Item = (&str, Percentage)> + '_ {
        self.criteria
            .iter()
            .map(String::as_str)
            .zip(self.ahp.weights.iter().map(|w| Percentage::from_fraction(*w)))
    }
}
