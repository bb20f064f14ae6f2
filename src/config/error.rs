//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Consistency threshold must be in (0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("Reciprocity tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),

    #[error("Eigen epsilon must be non-negative and finite, got {0}")]
    InvalidEpsilon(f64),

    #[error("Eigen iteration cap must be at least 1")]
    InvalidIterationCap,

    #[error("Report title must not be empty")]
    EmptyReportTitle,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
