//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod decision;

pub use decision::{
    CostProjectionRequest, EvaluateDecisionCommand, EvaluateDecisionHandler,
    GenerateReportCommand, GenerateReportHandler, GenerateReportResult, OptionCost,
};
