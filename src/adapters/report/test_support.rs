//! Shared fixtures for report adapter tests.

use crate::domain::ahp::{AhpEngine, PairwiseJudgments, CONSISTENCY_THRESHOLD};
use crate::domain::analysis::{
    ComparativeSynthesis, ConsistencyVerdict, CostComparison, CostProfile, OptionEvaluation,
    WeightedScorer, DEFAULT_HORIZON_YEARS,
};
use crate::domain::decision::{DecisionOutcome, ZoneSummary};
use crate::domain::foundation::Criterion;

pub(crate) fn sample_outcome(with_costs: bool) -> DecisionOutcome {
    let matrix = PairwiseJudgments::default().to_matrix().unwrap();
    let ahp = AhpEngine::default().compute_weights(&matrix).unwrap();

    let options = vec![
        OptionEvaluation::water_supply("camwater", "CAMWATER network", 7, 3, 4).unwrap(),
        OptionEvaluation::water_supply("borehole", "Self-supply borehole", 4, 9, 8).unwrap(),
        OptionEvaluation::water_supply("hybrid", "Hybrid system", 3, 10, 5).unwrap(),
    ];
    let ranking = WeightedScorer::rank(&ahp.weights, &options).unwrap();

    let cost_comparison = with_costs.then(|| {
        CostComparison::compute(
            "camwater",
            &CostProfile::new(150_000.0, 15_000.0).unwrap(),
            "borehole",
            &CostProfile::new(2_500_000.0, 5_000.0).unwrap(),
            DEFAULT_HORIZON_YEARS,
        )
    });

    DecisionOutcome {
        zone: ZoneSummary {
            key: "Nkolbisson".to_string(),
            district: "Nkolbisson".to_string(),
            city: "Yaoundé".to_string(),
            sector: "Yaoundé VII".to_string(),
        },
        criteria: Criterion::ALL.iter().map(|c| c.label().to_string()).collect(),
        verdict: ConsistencyVerdict::from_ratio(ahp.consistency_ratio, CONSISTENCY_THRESHOLD),
        consistency_threshold: CONSISTENCY_THRESHOLD,
        dominated: WeightedScorer::find_dominated(&options),
        synthesis: ComparativeSynthesis::derive(&options[0], &options[1]),
        ranking,
        cost_comparison,
        ahp,
    }
}
