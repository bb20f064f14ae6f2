//! JSON report generator adapter.

use serde::Serialize;

use crate::domain::decision::DecisionOutcome;
use crate::ports::{ReportError, ReportFormat, ReportGenerator, ReportOptions};

#[derive(Serialize)]
struct JsonReport<'a> {
    title: &'a str,
    generated_on: String,
    #[serde(flatten)]
    outcome: &'a DecisionOutcome,
}

/// Pretty-printed JSON implementation of ReportGenerator.
#[derive(Debug, Clone, Default)]
pub struct JsonReportGenerator;

impl JsonReportGenerator {
    /// Creates a new JSON report generator.
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate(
        &self,
        outcome: &DecisionOutcome,
        options: &ReportOptions,
    ) -> Result<String, ReportError> {
        let report = JsonReport {
            title: &options.title,
            generated_on: options.generated_on.format("%Y-%m-%d").to_string(),
            outcome,
        };
        serde_json::to_string_pretty(&report).map_err(|e| ReportError::Serialization(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
