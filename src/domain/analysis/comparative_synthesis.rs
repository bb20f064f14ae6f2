//! Comparative Synthesis - advantage and drawback notes for the network
//! option and the self-supply option, read off their raw scores.
//!
//! Weights play no part: the notes explain what the field scores say about
//! each option, whatever the decision maker's priorities.

use serde::{Deserialize, Serialize};

use super::OptionEvaluation;
use crate::domain::foundation::Criterion;

/// Scores below this are weak points.
const WEAK_SCORE: u8 = 5;
/// Scores above this are strong points.
const STRONG_SCORE: u8 = 7;

/// Whether a note speaks for or against an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    Advantage,
    Drawback,
}

impl NoteKind {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            NoteKind::Advantage => "Advantage",
            NoteKind::Drawback => "Drawback",
        }
    }
}

/// One advantage or drawback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisNote {
    pub kind: NoteKind,
    pub text: String,
}

impl SynthesisNote {
    fn advantage(text: &str) -> Self {
        Self {
            kind: NoteKind::Advantage,
            text: text.to_string(),
        }
    }

    fn drawback(text: &str) -> Self {
        Self {
            kind: NoteKind::Drawback,
            text: text.to_string(),
        }
    }
}

/// Notes gathered for one option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSynthesis {
    pub option_id: String,
    pub name: String,
    pub notes: Vec<SynthesisNote>,
}

/// Derives the side-by-side synthesis of a network and a self-supply option.
pub struct ComparativeSynthesis;

impl ComparativeSynthesis {
    /// Compares `network` against `self_supply` on the three water-supply
    /// criteria.
    ///
    /// # Rules
    /// Network:
    /// - cost score above the self-supply option's: low initial investment
    /// - availability below 5: unreliable supply
    /// - accessibility above 7: network already close by
    ///
    /// Self-supply:
    /// - availability above 7: autonomy, water around the clock
    /// - cost below 5: very high installation cost
    /// - accessibility above the network's: independent of network extensions
    ///
    /// Returns an empty list when either option lacks a water-supply score.
    pub fn derive(network: &OptionEvaluation, self_supply: &OptionEvaluation) -> Vec<OptionSynthesis> {
        let (Some(net), Some(own)) = (WaterScores::of(network), WaterScores::of(self_supply)) else {
            return Vec::new();
        };

        let mut network_notes = Vec::new();
        if net.cost > own.cost {
            network_notes.push(SynthesisNote::advantage("Low initial investment."));
        }
        if net.availability < WEAK_SCORE {
            network_notes.push(SynthesisNote::drawback("Unreliable network supply in this zone."));
        }
        if net.accessibility > STRONG_SCORE {
            network_notes.push(SynthesisNote::advantage("Network already close by."));
        }

        let mut self_supply_notes = Vec::new();
        if own.availability > STRONG_SCORE {
            self_supply_notes.push(SynthesisNote::advantage("Autonomy and water around the clock."));
        }
        if own.cost < WEAK_SCORE {
            self_supply_notes.push(SynthesisNote::drawback("Very high installation cost."));
        }
        if own.accessibility > net.accessibility {
            self_supply_notes.push(SynthesisNote::advantage("Independent of network extensions."));
        }

        vec![
            OptionSynthesis {
                option_id: network.id.clone(),
                name: network.name.clone(),
                notes: network_notes,
            },
            OptionSynthesis {
                option_id: self_supply.id.clone(),
                name: self_supply.name.clone(),
                notes: self_supply_notes,
            },
        ]
    }
}

struct WaterScores {
    cost: u8,
    availability: u8,
    accessibility: u8,
}

impl WaterScores {
    fn of(option: &OptionEvaluation) -> Option<Self> {
        if option.criteria_count() != Criterion::ALL.len() {
            return None;
        }
        Some(Self {
            cost: option.score_on(Criterion::Cost)?.value(),
            availability: option.score_on(Criterion::Availability)?.value(),
            accessibility: option.score_on(Criterion::Accessibility)?.value(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(synthesis: &OptionSynthesis, kind: NoteKind) -> Vec<&str> {
        synthesis
            .notes
            .iter()
            .filter(|n| n.kind == kind)
            .map(|n| n.text.as_str())
            .collect()
    }

    #[test]
    fn nkolbisson_defaults_give_every_rule_but_network_proximity() {
        let network = OptionEvaluation::water_supply("camwater", "CAMWATER network", 7, 3, 4).unwrap();
        let borehole = OptionEvaluation::water_supply("borehole", "Borehole", 4, 9, 8).unwrap();

        let synthesis = ComparativeSynthesis::derive(&network, &borehole);
        assert_eq!(synthesis.len(), 2);
        assert_eq!(synthesis[0].option_id, "camwater");
        assert_eq!(synthesis[1].option_id, "borehole");

        assert_eq!(texts(&synthesis[0], NoteKind::Advantage), vec!["Low initial investment."]);
        assert_eq!(
            texts(&synthesis[0], NoteKind::Drawback),
            vec!["Unreliable network supply in this zone."]
        );
        assert_eq!(
            texts(&synthesis[1], NoteKind::Advantage),
            vec!["Autonomy and water around the clock.", "Independent of network extensions."]
        );
        assert_eq!(texts(&synthesis[1], NoteKind::Drawback), vec!["Very high installation cost."]);
    }

    #[test]
    fn reliable_nearby_network_keeps_its_advantages() {
        let network = OptionEvaluation::water_supply("camwater", "Network", 5, 8, 9).unwrap();
        let borehole = OptionEvaluation::water_supply("borehole", "Borehole", 6, 7, 9).unwrap();

        let synthesis = ComparativeSynthesis::derive(&network, &borehole);

        assert_eq!(texts(&synthesis[0], NoteKind::Advantage), vec!["Network already close by."]);
        assert!(texts(&synthesis[0], NoteKind::Drawback).is_empty());
        // Availability 7 is not above the bar, accessibility only ties.
        assert!(synthesis[1].notes.is_empty());
    }

    #[test]
    fn thresholds_are_strict() {
        let network = OptionEvaluation::water_supply("a", "A", 5, 5, 7).unwrap();
        let borehole = OptionEvaluation::water_supply("b", "B", 5, 7, 7).unwrap();

        let synthesis = ComparativeSynthesis::derive(&network, &borehole);
        assert!(synthesis.iter().all(|s| s.notes.is_empty()));
    }

    #[test]
    fn options_off_the_water_supply_criteria_give_nothing() {
        let scores = |v: &[u8]| {
            v.iter()
                .map(|s| crate::domain::foundation::CriterionScore::try_new(*s).unwrap())
                .collect::<Vec<_>>()
        };
        let a = OptionEvaluation::new("a", "A", scores(&[9, 1])).unwrap();
        let b = OptionEvaluation::new("b", "B", scores(&[1, 9])).unwrap();

        assert!(ComparativeSynthesis::derive(&a, &b).is_empty());
    }

    #[test]
    fn note_kind_serializes_snake_case() {
        let json = serde_json::to_string(&NoteKind::Drawback).unwrap();
        assert_eq!(json, "\"drawback\"");
        assert_eq!(NoteKind::Advantage.label(), "Advantage");
    }
}
