//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Reporting Ports
//!
//! - `ReportGenerator` - Renders a decision outcome as a document

mod report_generator;

pub use report_generator::{ReportError, ReportFormat, ReportGenerator, ReportOptions};
