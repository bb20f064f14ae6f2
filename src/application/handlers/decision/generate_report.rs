//! GenerateReportHandler - Renders a decision outcome through a report port.

use std::sync::Arc;

use tracing::debug;

use crate::domain::decision::DecisionOutcome;
use crate::domain::foundation::DomainError;
use crate::ports::{ReportFormat, ReportGenerator, ReportOptions};

/// Command to render a report.
#[derive(Debug, Clone)]
pub struct GenerateReportCommand {
    pub outcome: DecisionOutcome,
    pub options: ReportOptions,
}

/// Rendered report.
#[derive(Debug, Clone)]
pub struct GenerateReportResult {
    pub format: ReportFormat,
    pub content: String,
}

/// Handler for report generation.
pub struct GenerateReportHandler {
    generator: Arc<dyn ReportGenerator>,
}

impl GenerateReportHandler {
    pub fn new(generator: Arc<dyn ReportGenerator>) -> Self {
        Self { generator }
    }

    pub fn handle(&self, cmd: GenerateReportCommand) -> Result<GenerateReportResult, DomainError> {
        let content = self.generator.generate(&cmd.outcome, &cmd.options)?;
        let format = self.generator.format();
        debug!(?format, bytes = content.len(), zone = %cmd.outcome.zone.key, "Report generated");

        Ok(GenerateReportResult { format, content })
    }
}
