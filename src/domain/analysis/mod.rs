//! Analysis Module - Pure domain services around the AHP weights.
//!
//! # Components
//!
//! - `OptionEvaluation` - Raw 1-10 scores of one supply option
//! - `WeightedScorer` - Weighted score per option, ranking, dominance
//! - `ConsistencyVerdict` - Trust signal from the consistency ratio
//! - `CostProfile` / `CostComparison` - Cumulative cost curves and break-even
//! - `ComparativeSynthesis` - Advantage and drawback notes from raw scores
//!
//! All functions are pure (no side effects) and stateless.

mod comparative_synthesis;
mod cost_projection;
mod option_evaluation;
mod weighted_scorer;

pub use comparative_synthesis::{ComparativeSynthesis, NoteKind, OptionSynthesis, SynthesisNote};
pub use cost_projection::{
    break_even_years, CostComparison, CostProfile, DEFAULT_HORIZON_YEARS,
};
pub use option_evaluation::OptionEvaluation;
pub use weighted_scorer::{
    ConsistencyVerdict, DominatedOption, ScoredOption, ScoringError, WeightedScorer,
};
