//! Weighted Scorer - final score per option, ranking, and dominance detection.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

use super::OptionEvaluation;
use crate::domain::foundation::{CriterionScore, DomainError, ErrorCode, Percentage};

/// Errors raised while combining weights with option scores.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScoringError {
    #[error("option '{option_id}' has {actual} scores but there are {expected} weights")]
    DimensionMismatch {
        option_id: String,
        expected: usize,
        actual: usize,
    },

    #[error("no options to score")]
    NoOptions,
}

impl From<ScoringError> for DomainError {
    fn from(err: ScoringError) -> Self {
        let code = match err {
            ScoringError::DimensionMismatch { .. } => ErrorCode::DimensionMismatch,
            ScoringError::NoOptions => ErrorCode::NoOptions,
        };
        DomainError::new(code, err.to_string())
    }
}

/// An option with its weighted score and rank (1 = best).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredOption {
    pub option_id: String,
    pub name: String,
    pub score: Percentage,
    pub rank: usize,
}

/// Trust signal derived from the consistency ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyVerdict {
    /// CR below the threshold: the weights can be relied on.
    Consistent,
    /// CR at or above the threshold: judgments should be revisited.
    Contradictory,
}

impl ConsistencyVerdict {
    /// Classifies a consistency ratio against a threshold.
    pub fn from_ratio(consistency_ratio: f64, threshold: f64) -> Self {
        if consistency_ratio < threshold {
            ConsistencyVerdict::Consistent
        } else {
            ConsistencyVerdict::Contradictory
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ConsistencyVerdict::Consistent => "Consistent judgments",
            ConsistencyVerdict::Contradictory => "Contradictory judgments",
        }
    }

    /// Returns true if the weights can be trusted.
    pub fn is_trustworthy(&self) -> bool {
        matches!(self, ConsistencyVerdict::Consistent)
    }
}

/// An option that another option beats or ties on every criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominatedOption {
    pub option_id: String,
    pub dominated_by_id: String,
    pub explanation: String,
}

/// Combines AHP weights with raw option scores.
pub struct WeightedScorer;

impl WeightedScorer {
    /// Computes the weighted score of one option.
    ///
    /// # Algorithm
    /// score = Σ(weight[i] × score[i]) / 10
    ///
    /// # Errors
    /// - `DimensionMismatch` if the option does not have one score per weight
    pub fn score(weights: &[f64], option: &OptionEvaluation) -> Result<Percentage, ScoringError> {
        if option.scores.len() != weights.len() {
            return Err(ScoringError::DimensionMismatch {
                option_id: option.id.clone(),
                expected: weights.len(),
                actual: option.scores.len(),
            });
        }

        let total: f64 = weights
            .iter()
            .zip(&option.scores)
            .map(|(w, s)| w * f64::from(s.value()))
            .sum();

        Ok(Percentage::from_fraction(
            total / f64::from(CriterionScore::MAX),
        ))
    }

    /// Scores and ranks options, best first.
    ///
    /// Ties keep input order, so the earlier option ranks higher.
    pub fn rank(
        weights: &[f64],
        options: &[OptionEvaluation],
    ) -> Result<Vec<ScoredOption>, ScoringError> {
        let mut scored = options
            .iter()
            .map(|option| {
                Ok(ScoredOption {
                    option_id: option.id.clone(),
                    name: option.name.clone(),
                    score: Self::score(weights, option)?,
                    rank: 0,
                })
            })
            .collect::<Result<Vec<_>, ScoringError>>()?;

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        for (i, option) in scored.iter_mut().enumerate() {
            option.rank = i + 1;
        }

        Ok(scored)
    }

    /// Returns the recommended option (rank 1).
    ///
    /// # Errors
    /// - `NoOptions` if `options` is empty
    pub fn recommend(
        weights: &[f64],
        options: &[OptionEvaluation],
    ) -> Result<ScoredOption, ScoringError> {
        Self::rank(weights, options)?
            .into_iter()
            .next()
            .ok_or(ScoringError::NoOptions)
    }

    /// Finds options dominated by another option.
    ///
    /// Option A dominates option B if A >= B on every criterion and
    /// A > B on at least one. Weights play no part.
    pub fn find_dominated(options: &[OptionEvaluation]) -> Vec<DominatedOption> {
        let mut dominated = Vec::new();

        for candidate in options {
            for dominator in options {
                if candidate.id == dominator.id {
                    continue;
                }

                if Self::dominates(dominator, candidate) {
                    dominated.push(DominatedOption {
                        option_id: candidate.id.clone(),
                        dominated_by_id: dominator.id.clone(),
                        explanation: format!(
                            "{} scores at least as well on every criterion",
                            dominator.name
                        ),
                    });
                    break;
                }
            }
        }

        dominated
    }

    fn dominates(a: &OptionEvaluation, b: &OptionEvaluation) -> bool {
        if a.scores.len() != b.scores.len() {
            return false;
        }

        let mut strictly_better_on_one = false;
        for (sa, sb) in a.scores.iter().zip(&b.scores) {
            if sa < sb {
                return false;
            }
            if sa > sb {
                strictly_better_on_one = true;
            }
        }

        strictly_better_on_one
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camwater() -> OptionEvaluation {
        OptionEvaluation::water_supply("camwater", "CAMWATER network", 8, 3, 6).unwrap()
    }

    fn borehole() -> OptionEvaluation {
        OptionEvaluation::water_supply("borehole", "Borehole", 4, 9, 8).unwrap()
    }

    const EQUAL: [f64; 3] = [1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0];

    #[test]
    fn score_is_weighted_mean_over_ten() {
        let score = WeightedScorer::score(&[0.5, 0.3, 0.2], &camwater()).unwrap();
        // (0.5*8 + 0.3*3 + 0.2*6) / 10 = 0.61
        assert!((score.as_fraction() - 0.61).abs() < 1e-12);
    }

    #[test]
    fn score_rejects_dimension_mismatch() {
        let err = WeightedScorer::score(&[0.5, 0.5], &camwater()).unwrap_err();
        assert_eq!(
            err,
            ScoringError::DimensionMismatch {
                option_id: "camwater".to_string(),
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn rank_orders_best_first() {
        let ranked = WeightedScorer::rank(&EQUAL, &[camwater(), borehole()]).unwrap();
        assert_eq!(ranked[0].option_id, "borehole");
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].option_id, "camwater");
        assert_eq!(ranked[1].rank, 2);
    }

    #[test]
    fn cost_heavy_weights_favor_network() {
        let best = WeightedScorer::recommend(&[0.9, 0.05, 0.05], &[camwater(), borehole()]).unwrap();
        assert_eq!(best.option_id, "camwater");
    }

    #[test]
    fn tie_goes_to_earlier_option() {
        let a = OptionEvaluation::water_supply("a", "A", 5, 5, 5).unwrap();
        let b = OptionEvaluation::water_supply("b", "B", 5, 5, 5).unwrap();
        assert_eq!(WeightedScorer::recommend(&EQUAL, &[a.clone(), b.clone()]).unwrap().option_id, "a");
        assert_eq!(WeightedScorer::recommend(&EQUAL, &[b, a]).unwrap().option_id, "b");
    }

    #[test]
    fn recommend_empty_is_error() {
        assert_eq!(
            WeightedScorer::recommend(&EQUAL, &[]).unwrap_err(),
            ScoringError::NoOptions
        );
    }

    #[test]
    fn verdict_threshold_is_strict() {
        assert_eq!(ConsistencyVerdict::from_ratio(0.05, 0.1), ConsistencyVerdict::Consistent);
        assert_eq!(ConsistencyVerdict::from_ratio(0.1, 0.1), ConsistencyVerdict::Contradictory);
        assert!(!ConsistencyVerdict::from_ratio(0.3, 0.1).is_trustworthy());
    }

    #[test]
    fn find_dominated_detects_clear_dominance() {
        let hybrid = OptionEvaluation::water_supply("hybrid", "Hybrid", 4, 10, 8).unwrap();
        let dominated = WeightedScorer::find_dominated(&[camwater(), borehole(), hybrid]);
        assert_eq!(dominated.len(), 1);
        assert_eq!(dominated[0].option_id, "borehole");
        assert_eq!(dominated[0].dominated_by_id, "hybrid");
    }

    #[test]
    fn find_dominated_ignores_tradeoffs_and_ties() {
        assert!(WeightedScorer::find_dominated(&[camwater(), borehole()]).is_empty());

        let twin = OptionEvaluation::water_supply("twin", "Twin", 8, 3, 6).unwrap();
        assert!(WeightedScorer::find_dominated(&[camwater(), twin]).is_empty());
    }
}
