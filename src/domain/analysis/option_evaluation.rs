//! Option Evaluation - raw per-criterion scores for one supply option.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Criterion, CriterionScore, ValidationError};

/// Field scores an evaluator gave one supply option.
///
/// `scores[i]` is the score on criterion `i` of the comparison matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionEvaluation {
    pub id: String,
    pub name: String,
    pub scores: Vec<CriterionScore>,
}

impl OptionEvaluation {
    /// Creates an evaluation with arbitrary criteria count.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        scores: Vec<CriterionScore>,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("option_id"));
        }
        let name = name.into();
        Ok(Self {
            name: if name.trim().is_empty() { id.clone() } else { name },
            id,
            scores,
        })
    }

    /// Creates an evaluation on the three water-supply criteria.
    pub fn water_supply(
        id: impl Into<String>,
        name: impl Into<String>,
        cost: u8,
        availability: u8,
        accessibility: u8,
    ) -> Result<Self, ValidationError> {
        Self::new(
            id,
            name,
            vec![
                CriterionScore::try_new(cost)?,
                CriterionScore::try_new(availability)?,
                CriterionScore::try_new(accessibility)?,
            ],
        )
    }

    /// Returns the score on a water-supply criterion.
    pub fn score_on(&self, criterion: Criterion) -> Option<CriterionScore> {
        self.scores.get(criterion.index()).copied()
    }

    /// Returns the number of scored criteria.
    pub fn criteria_count(&self) -> usize {
        self.scores.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_supply_orders_scores_by_criterion() {
        let option = OptionEvaluation::water_supply("camwater", "CAMWATER network", 7, 3, 4).unwrap();
        assert_eq!(option.score_on(Criterion::Cost).unwrap().value(), 7);
        assert_eq!(option.score_on(Criterion::Availability).unwrap().value(), 3);
        assert_eq!(option.score_on(Criterion::Accessibility).unwrap().value(), 4);
        assert_eq!(option.criteria_count(), 3);
    }

    #[test]
    fn water_supply_rejects_out_of_range_scores() {
        assert!(OptionEvaluation::water_supply("borehole", "Borehole", 0, 5, 5).is_err());
        assert!(OptionEvaluation::water_supply("borehole", "Borehole", 5, 11, 5).is_err());
    }

    #[test]
    fn new_rejects_blank_id() {
        let err = OptionEvaluation::new("  ", "Name", vec![]).unwrap_err();
        assert!(matches!(err, ValidationError::EmptyField { .. }));
    }

    #[test]
    fn new_defaults_name_to_id() {
        let option = OptionEvaluation::new("hybrid", "", vec![]).unwrap();
        assert_eq!(option.name, "hybrid");
    }

    #[test]
    fn evaluation_deserializes_from_yaml() {
        let yaml = "id: borehole\nname: Borehole\nscores: [4, 9, 8]\n";
        let option: OptionEvaluation = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(option.score_on(Criterion::Availability).unwrap().value(), 9);
    }
}
