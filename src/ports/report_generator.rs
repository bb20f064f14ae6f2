//! Report Generator Port - rendering interface for decision outcomes.
//!
//! This port defines the contract for turning a `DecisionOutcome` into a
//! shareable document. Adapters (Markdown, JSON) provide the implementation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::decision::DecisionOutcome;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Port for rendering decision outcomes.
///
/// # Contract
///
/// Implementations must:
/// - Render every criterion weight and the consistency ratio
/// - Render every ranked option and the recommendation
/// - Render the cost projection when the outcome carries one
/// - Not mutate or recompute the outcome
///
/// # Usage
///
/// ```rust,ignore
/// let generator: &dyn ReportGenerator = &MarkdownReportGenerator::new();
/// let document = generator.generate(&outcome, &ReportOptions::default())?;
/// ```
pub trait ReportGenerator: Send + Sync {
    /// Renders the full report.
    ///
    /// # Errors
    ///
    /// Returns `ReportError` if the outcome cannot be rendered.
    fn generate(
        &self,
        outcome: &DecisionOutcome,
        options: &ReportOptions,
    ) -> Result<String, ReportError>;

    /// Output format this generator produces.
    fn format(&self) -> ReportFormat;
}

/// Options for report generation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    /// Title displayed in the header.
    pub title: String,

    /// Organization named in the footer.
    pub organization: String,

    /// Date printed in the header.
    pub generated_on: NaiveDate,

    /// Include the full year-by-year cost curves.
    pub include_cost_curves: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: "Expert Report: Hydro-Decisio".to_string(),
            organization: "Hydro-Decisio decision support".to_string(),
            generated_on: chrono::Local::now().date_naive(),
            include_cost_curves: false,
        }
    }
}

/// Report format variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Human-readable Markdown document.
    #[default]
    Markdown,

    /// Machine-readable JSON document.
    Json,
}

/// Errors that can occur during report generation.
#[derive(Debug, Clone, Error)]
pub enum ReportError {
    /// Missing required data for generation.
    #[error("Missing required data: {field}")]
    MissingData { field: String },

    /// Serialization failed.
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl ReportError {
    /// Creates a missing data error.
    pub fn missing_data(field: impl Into<String>) -> Self {
        Self::MissingData {
            field: field.into(),
        }
    }
}

impl From<ReportError> for DomainError {
    fn from(err: ReportError) -> Self {
        DomainError::new(ErrorCode::ReportError, err.to_string())
    }
}
