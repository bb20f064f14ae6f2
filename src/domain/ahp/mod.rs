//! AHP Module - Analytic Hierarchy Process weights and consistency.
//!
//! # Components
//!
//! - `ComparisonMatrix` - Validated reciprocal pairwise-comparison matrix
//! - `PairwiseJudgments` - The three slider judgments of the supply decision
//! - `RandomIndexTable` - Saaty's random index per matrix order
//! - `AhpEngine` - Weight vector, lambda_max, CI and CR for one matrix
//!
//! All operations are pure and synchronous. A matrix is validated once at
//! construction; the engine only ever receives well-formed input.

mod comparison_matrix;
mod engine;
mod errors;
mod pairwise_judgments;
mod random_index;

pub use comparison_matrix::{ComparisonMatrix, DEFAULT_RECIPROCITY_TOLERANCE};
pub use engine::{
    compute_weights, AhpEngine, AhpResult, ConsistencyScale, EngineOptions, WeightMethod,
    CONSISTENCY_THRESHOLD,
};
pub use errors::AhpError;
pub use pairwise_judgments::PairwiseJudgments;
pub use random_index::{RandomIndexTable, RANDOM_INDEX, UNTABULATED_DIVISOR};
