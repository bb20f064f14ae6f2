//! Report adapters - Implementations of the ReportGenerator port.
//!
//! - `MarkdownReportGenerator` - Human-readable decision report
//! - `JsonReportGenerator` - Machine-readable decision report

mod json_generator;
mod markdown_generator;

#[cfg(test)]
pub(crate) mod test_support;

pub use json_generator::JsonReportGenerator;
pub use markdown_generator::MarkdownReportGenerator;

use crate::ports::{ReportFormat, ReportGenerator};

/// Returns the generator for a format.
pub fn generator_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Markdown => Box::new(MarkdownReportGenerator::new()),
        ReportFormat::Json => Box::new(JsonReportGenerator::new()),
    }
}
