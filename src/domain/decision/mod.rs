//! Decision Module - result of one supply-option evaluation.

mod outcome;

pub use outcome::{DecisionOutcome, ZoneSummary};
