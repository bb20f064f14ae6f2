//! Report and zone catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::ports::ReportOptions;

/// Report configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_organization")]
    pub organization: String,

    /// YAML zone catalog replacing the built-in one
    pub zone_catalog_path: Option<PathBuf>,

    /// Append the year-by-year cost table to Markdown reports
    #[serde(default)]
    pub include_cost_curves: bool,
}

impl ReportConfig {
    /// Report options dated today.
    pub fn to_options(&self) -> ReportOptions {
        ReportOptions {
            title: self.title.clone(),
            organization: self.organization.clone(),
            include_cost_curves: self.include_cost_curves,
            ..ReportOptions::default()
        }
    }

    /// Validate report configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyReportTitle);
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            organization: default_organization(),
            zone_catalog_path: None,
            include_cost_curves: false,
        }
    }
}

fn default_title() -> String {
    ReportOptions::default().title
}

fn default_organization() -> String {
    ReportOptions::default().organization
}
