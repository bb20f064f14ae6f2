//! Decision handlers.

mod evaluate_decision;
mod generate_report;

pub use evaluate_decision::{
    CostProjectionRequest, EvaluateDecisionCommand, EvaluateDecisionHandler, OptionCost,
};
pub use generate_report::{GenerateReportCommand, GenerateReportHandler, GenerateReportResult};
