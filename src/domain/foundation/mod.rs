//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, enums, and error types
//! that form the vocabulary of the Hydro-Decisio domain.

mod criterion;
mod errors;
mod judgment;
mod percentage;
mod score;

pub use criterion::Criterion;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use judgment::Judgment;
pub use percentage::Percentage;
pub use score::CriterionScore;
