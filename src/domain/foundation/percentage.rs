//! Percentage value object (fraction of one).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A share between 0 and 1 inclusive, displayed as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(1.0);

    /// Creates a new Percentage from a fraction, clamping to valid range.
    ///
    /// Non-finite input collapses to zero.
    pub fn from_fraction(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self::ZERO
        }
    }

    /// Creates a Percentage, returning error if outside 0..=1.
    pub fn try_from_fraction(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::invalid_format(
                "percentage",
                format!("{} is not a fraction between 0 and 1", value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        self.0
    }

    /// Returns the value on the 0-100 scale.
    pub fn as_percent(&self) -> f64 {
        self.0 * 100.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.as_percent())
    }
}
