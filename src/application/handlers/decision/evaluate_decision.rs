//! EvaluateDecisionHandler - Command handler for one supply decision.
//!
//! Runs the full pipeline for a study zone:
//! - Judgments or raw matrix → AHP weights and consistency ratio
//! - Weights × option scores → ranking and recommendation
//! - Optional CAPEX/OPEX profiles → cumulative cost comparison
//! - Network versus self-supply advantage and drawback notes

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::domain::ahp::{AhpEngine, ComparisonMatrix, ConsistencyScale, PairwiseJudgments};
use crate::domain::analysis::{
    ComparativeSynthesis, ConsistencyVerdict, CostComparison, CostProfile, OptionEvaluation,
    OptionSynthesis, ScoringError, WeightedScorer, DEFAULT_HORIZON_YEARS,
};
use crate::domain::decision::{DecisionOutcome, ZoneSummary};
use crate::domain::foundation::{Criterion, DomainError, ErrorCode};
use crate::domain::zone::{StudyZone, ZoneCatalog};

/// Command to evaluate supply options for a zone.
///
/// Every field is optional: an empty command evaluates the default zone
/// with equal judgments and the zone's default option scores.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvaluateDecisionCommand {
    /// Zone key; unknown or missing keys fall back to the default zone.
    #[serde(default)]
    pub zone: Option<String>,

    /// The three water-supply slider judgments.
    #[serde(default)]
    pub judgments: Option<PairwiseJudgments>,

    /// Raw comparison matrix rows, for any number of criteria.
    #[serde(default)]
    pub matrix: Option<Vec<Vec<f64>>>,

    /// Criterion labels in matrix order.
    #[serde(default)]
    pub criteria: Option<Vec<String>>,

    /// Options to score; empty means the zone's defaults.
    #[serde(default)]
    pub options: Vec<OptionEvaluation>,

    #[serde(default)]
    pub costs: Option<CostProjectionRequest>,
}

/// CAPEX/OPEX of one option.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionCost {
    pub option_id: String,
    #[serde(flatten)]
    pub profile: CostProfile,
}

/// Two options to compare over a horizon.
#[derive(Debug, Clone, Deserialize)]
pub struct CostProjectionRequest {
    pub incumbent: OptionCost,
    pub challenger: OptionCost,
    #[serde(default = "default_horizon")]
    pub horizon_years: u32,
}

fn default_horizon() -> u32 {
    DEFAULT_HORIZON_YEARS
}

/// Handler for decision evaluation.
pub struct EvaluateDecisionHandler {
    engine: AhpEngine,
    catalog: Arc<ZoneCatalog>,
    consistency_threshold: f64,
    reciprocity_tolerance: f64,
}

impl EvaluateDecisionHandler {
    pub fn new(catalog: Arc<ZoneCatalog>, config: &EngineConfig) -> Self {
        Self {
            engine: AhpEngine::new(config.to_options()),
            catalog,
            consistency_threshold: config.consistency_threshold,
            reciprocity_tolerance: config.reciprocity_tolerance,
        }
    }

    pub fn handle(&self, cmd: EvaluateDecisionCommand) -> Result<DecisionOutcome, DomainError> {
        // 1. Resolve zone
        let zone = self.resolve_zone(cmd.zone.as_deref());

        // 2. Build comparison matrix
        let matrix = self.build_matrix(&cmd)?;
        let water_supply_criteria =
            cmd.criteria.is_none() && matrix.order() == Criterion::ALL.len();
        let criteria = criterion_labels(cmd.criteria, matrix.order())?;

        // 3. Weights and consistency
        let ahp = self.engine.compute_weights(&matrix)?;
        debug!(
            zone = %zone.key,
            order = ahp.order(),
            lambda_max = ahp.lambda_max,
            consistency_ratio = ahp.consistency_ratio,
            "AHP weights computed"
        );

        let verdict = ConsistencyVerdict::from_ratio(ahp.consistency_ratio, self.consistency_threshold);
        if !verdict.is_trustworthy() {
            warn!(
                consistency_ratio = ahp.consistency_ratio,
                threshold = self.consistency_threshold,
                "Pairwise judgments are contradictory"
            );
        }
        if ahp.scale == ConsistencyScale::Unscaled {
            warn!(order = ahp.order(), "No random index for this order, CR is unscaled");
        }

        // 4. Score and rank options
        let options = if cmd.options.is_empty() {
            zone.default_options.clone()
        } else {
            cmd.options
        };
        if options.is_empty() {
            return Err(ScoringError::NoOptions.into());
        }
        let ranking = WeightedScorer::rank(&ahp.weights, &options)?;
        let dominated = WeightedScorer::find_dominated(&options);

        // 5. Optional cost comparison
        let cost_comparison = cmd
            .costs
            .map(|costs| compare_costs(&costs, &options))
            .transpose()?;

        // 6. Comparative synthesis
        let synthesis = if water_supply_criteria {
            synthesize(&options, cost_comparison.as_ref())
        } else {
            Vec::new()
        };

        let outcome = DecisionOutcome {
            zone: ZoneSummary {
                key: zone.key.clone(),
                district: zone.district.clone(),
                city: zone.city.clone(),
                sector: zone.sector.clone(),
            },
            criteria,
            ahp,
            consistency_threshold: self.consistency_threshold,
            verdict,
            ranking,
            dominated,
            cost_comparison,
            synthesis,
        };

        if let Some(best) = outcome.recommendation() {
            info!(
                zone = %outcome.zone.key,
                option_id = %best.option_id,
                score = %best.score,
                verdict = outcome.verdict.label(),
                "Decision evaluated"
            );
        }

        Ok(outcome)
    }

    fn resolve_zone(&self, key: Option<&str>) -> &StudyZone {
        match key {
            Some(key) => self.catalog.find(key).unwrap_or_else(|| {
                let fallback = self.catalog.default_zone();
                warn!(requested = key, fallback = %fallback.key, "Unknown zone, using default");
                fallback
            }),
            None => self.catalog.default_zone(),
        }
    }

    fn build_matrix(&self, cmd: &EvaluateDecisionCommand) -> Result<ComparisonMatrix, DomainError> {
        let matrix = match (&cmd.judgments, &cmd.matrix) {
            (Some(_), Some(_)) => {
                return Err(DomainError::validation(
                    "matrix",
                    "Provide either judgments or a matrix, not both",
                ))
            }
            (None, Some(rows)) => {
                ComparisonMatrix::from_rows_with_tolerance(rows, self.reciprocity_tolerance)?
            }
            (Some(judgments), None) => judgments.to_matrix()?,
            (None, None) => PairwiseJudgments::default().to_matrix()?,
        };
        Ok(matrix)
    }
}

fn criterion_labels(labels: Option<Vec<String>>, order: usize) -> Result<Vec<String>, DomainError> {
    match labels {
        Some(labels) if labels.len() != order => Err(DomainError::new(
            ErrorCode::DimensionMismatch,
            format!("Expected {} criterion labels, got {}", order, labels.len()),
        )),
        Some(labels) => Ok(labels),
        None if order == Criterion::ALL.len() => {
            Ok(Criterion::ALL.iter().map(|c| c.label().to_string()).collect())
        }
        None => Ok((1..=order).map(|i| format!("Criterion {}", i)).collect()),
    }
}

fn compare_costs(
    costs: &CostProjectionRequest,
    options: &[OptionEvaluation],
) -> Result<CostComparison, DomainError> {
    for entry in [&costs.incumbent, &costs.challenger] {
        if !options.iter().any(|o| o.id == entry.option_id) {
            return Err(DomainError::validation(
                "costs.option_id",
                format!("Unknown option '{}'", entry.option_id),
            ));
        }
        entry.profile.validate()?;
    }

    let comparison = CostComparison::compute(
        costs.incumbent.option_id.clone(),
        &costs.incumbent.profile,
        costs.challenger.option_id.clone(),
        &costs.challenger.profile,
        costs.horizon_years,
    );
    debug!(
        horizon_years = comparison.horizon_years,
        break_even_years = ?comparison.break_even_years,
        "Cost comparison computed"
    );

    Ok(comparison)
}

/// Pairs the network option with the self-supply option.
///
/// The cost comparison's incumbent and challenger take precedence; otherwise
/// the first two options in input order are compared.
fn synthesize(
    options: &[OptionEvaluation],
    costs: Option<&CostComparison>,
) -> Vec<OptionSynthesis> {
    let find = |id: &str| options.iter().find(|o| o.id == id);
    let pair = match costs {
        Some(costs) => {
            find(costs.incumbent_id.as_str()).zip(find(costs.challenger_id.as_str()))
        }
        None => options.first().zip(options.get(1)),
    };

    match pair {
        Some((network, self_supply)) => {
            let synthesis = ComparativeSynthesis::derive(network, self_supply);
            debug!(
                network = %network.id,
                self_supply = %self_supply.id,
                notes = synthesis.iter().map(|s| s.notes.len()).sum::<usize>(),
                "Comparative synthesis derived"
            );
            synthesis
        }
        None => Vec::new(),
    }
}
