//! Errors raised while building comparison matrices or deriving weights.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AhpError {
    #[error("comparison matrix needs at least 2 criteria, got {order}")]
    TooFewCriteria { order: usize },

    #[error("comparison matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("entry ({row}, {col}) must be positive and finite, got {value}")]
    NonPositiveEntry { row: usize, col: usize, value: f64 },

    #[error("diagonal entry {index} must be 1, got {value}")]
    NonUnitDiagonal { index: usize, value: f64 },

    #[error("entries ({row}, {col}) and ({col}, {row}) are not reciprocal: {value} x {mirror} = {product}")]
    NotReciprocal {
        row: usize,
        col: usize,
        value: f64,
        mirror: f64,
        product: f64,
    },

    #[error("row {row}: cannot parse '{text}' as a number")]
    UnparsableEntry { row: usize, text: String },

    #[error("upper triangle of an order-{order} matrix needs {expected} entries, got {actual}")]
    TriangleLength {
        order: usize,
        expected: usize,
        actual: usize,
    },

    #[error("eigenvalue solve did not converge within {max_iterations} iterations")]
    EigenSolveFailed { max_iterations: usize },

    #[error("computation produced a non-finite {quantity}")]
    NonFiniteResult { quantity: &'static str },
}

impl AhpError {
    /// Returns true if the error comes from input shape or content.
    pub fn is_input_error(&self) -> bool {
        !matches!(
            self,
            AhpError::EigenSolveFailed { .. } | AhpError::NonFiniteResult { .. }
        )
    }
}

impl From<AhpError> for DomainError {
    fn from(err: AhpError) -> Self {
        let code = if err.is_input_error() {
            ErrorCode::InvalidMatrix
        } else {
            ErrorCode::NumericalFailure
        };
        DomainError::new(code, err.to_string())
    }
}
