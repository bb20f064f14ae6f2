//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, enums, errors)
//! - `ahp` - Comparison matrices and the AHP weight/consistency engine
//! - `analysis` - Pure services built on the weights (scoring, costs)
//! - `zone` - Study zones and their default option scores
//! - `decision` - Aggregated outcome of one evaluation

pub mod ahp;
pub mod analysis;
pub mod decision;
pub mod foundation;
pub mod zone;
