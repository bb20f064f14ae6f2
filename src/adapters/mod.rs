//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `report` - Report generators (Markdown, JSON)

pub mod report;

pub use report::{generator_for, JsonReportGenerator, MarkdownReportGenerator};
