//! Cost Projection - cumulative spending curves and break-even point.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Default projection horizon in years.
pub const DEFAULT_HORIZON_YEARS: u32 = 10;

/// Upfront and running cost of one supply option, in FCFA.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostProfile {
    /// Initial investment.
    pub capex: f64,
    /// Average monthly bill or maintenance cost.
    pub monthly_opex: f64,
}

impl CostProfile {
    /// Creates a cost profile, rejecting negative or non-finite amounts.
    pub fn new(capex: f64, monthly_opex: f64) -> Result<Self, ValidationError> {
        let profile = Self { capex, monthly_opex };
        profile.validate()?;
        Ok(profile)
    }

    /// Checks both amounts are finite and non-negative.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [("capex", self.capex), ("monthly_opex", self.monthly_opex)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::not_positive(field, value));
            }
        }
        Ok(())
    }

    /// Cumulative spending after `years` years.
    pub fn cumulative_at(&self, years: u32) -> f64 {
        self.capex + self.monthly_opex * 12.0 * f64::from(years)
    }

    /// Cumulative spending for each year from 0 to `years` inclusive.
    pub fn project(&self, years: u32) -> Vec<f64> {
        (0..=years).map(|y| self.cumulative_at(y)).collect()
    }
}

/// Years until `challenger` becomes cheaper overall than `incumbent`.
///
/// Returns `None` when the incumbent's monthly cost does not exceed the
/// challenger's: the curves never cross in the challenger's favour. A value
/// at or below zero means the challenger is cheaper from year 0.
pub fn break_even_years(incumbent: &CostProfile, challenger: &CostProfile) -> Option<f64> {
    if incumbent.monthly_opex <= challenger.monthly_opex {
        return None;
    }

    let capex_gap = challenger.capex - incumbent.capex;
    let monthly_saving = incumbent.monthly_opex - challenger.monthly_opex;
    Some(capex_gap / monthly_saving / 12.0)
}

/// Side-by-side projection of two options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostComparison {
    pub horizon_years: u32,
    pub incumbent_id: String,
    pub challenger_id: String,
    pub incumbent_curve: Vec<f64>,
    pub challenger_curve: Vec<f64>,
    pub break_even_years: Option<f64>,
}

impl CostComparison {
    /// Projects both profiles over `horizon_years`.
    pub fn compute(
        incumbent_id: impl Into<String>,
        incumbent: &CostProfile,
        challenger_id: impl Into<String>,
        challenger: &CostProfile,
        horizon_years: u32,
    ) -> Self {
        Self {
            horizon_years,
            incumbent_id: incumbent_id.into(),
            challenger_id: challenger_id.into(),
            incumbent_curve: incumbent.project(horizon_years),
            challenger_curve: challenger.project(horizon_years),
            break_even_years: break_even_years(incumbent, challenger),
        }
    }

    /// Incumbent's total at the horizon.
    pub fn incumbent_total(&self) -> f64 {
        self.incumbent_curve.last().copied().unwrap_or_default()
    }

    /// Challenger's total at the horizon.
    pub fn challenger_total(&self) -> f64 {
        self.challenger_curve.last().copied().unwrap_or_default()
    }
}
