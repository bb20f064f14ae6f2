//! Judgment value object for pairwise comparisons (1/9 to 9 ratio scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Relative tolerance used when mapping a raw ratio onto the scale.
const SCALE_MATCH_TOLERANCE: f64 = 1e-2;

/// Pairwise preference of one criterion over another.
///
/// The scale is the five-step slider used by the input collector:
/// `1/9`, `1/5`, `1`, `5`, `9`. Serialized as the raw ratio so decision
/// files can write `5` or `0.2` directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum Judgment {
    /// The second criterion is extremely more important (1/9).
    ExtremelyLess,
    /// The second criterion is strongly more important (1/5).
    StronglyLess,
    #[default]
    Equal,
    /// The first criterion is strongly more important (5).
    Strongly,
    /// The first criterion is extremely more important (9).
    Extremely,
}

impl Judgment {
    /// All scale steps, from least to most preferred.
    pub const SCALE: [Judgment; 5] = [
        Judgment::ExtremelyLess,
        Judgment::StronglyLess,
        Judgment::Equal,
        Judgment::Strongly,
        Judgment::Extremely,
    ];

    /// Maps a ratio onto the scale, returning error if it is not a scale step.
    pub fn try_from_ratio(ratio: f64) -> Result<Self, ValidationError> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(ValidationError::not_positive("judgment", ratio));
        }

        Self::SCALE
            .iter()
            .copied()
            .find(|j| ((ratio - j.ratio()) / j.ratio()).abs() <= SCALE_MATCH_TOLERANCE)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "judgment",
                    format!("{} is not one of 1/9, 1/5, 1, 5, 9", ratio),
                )
            })
    }

    /// Returns the ratio this judgment stands for.
    pub fn ratio(&self) -> f64 {
        match self {
            Judgment::ExtremelyLess => 1.0 / 9.0,
            Judgment::StronglyLess => 1.0 / 5.0,
            Judgment::Equal => 1.0,
            Judgment::Strongly => 5.0,
            Judgment::Extremely => 9.0,
        }
    }

    /// Returns the mirrored judgment (j over i instead of i over j).
    pub fn reciprocal(&self) -> Self {
        match self {
            Judgment::ExtremelyLess => Judgment::Extremely,
            Judgment::StronglyLess => Judgment::Strongly,
            Judgment::Equal => Judgment::Equal,
            Judgment::Strongly => Judgment::StronglyLess,
            Judgment::Extremely => Judgment::ExtremelyLess,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Judgment::ExtremelyLess => "Extremely less important",
            Judgment::StronglyLess => "Strongly less important",
            Judgment::Equal => "Equally important",
            Judgment::Strongly => "Strongly more important",
            Judgment::Extremely => "Extremely more important",
        }
    }
}

impl TryFrom<f64> for Judgment {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_from_ratio(value)
    }
}

impl From<Judgment> for f64 {
    fn from(judgment: Judgment) -> Self {
        judgment.ratio()
    }
}

impl fmt::Display for Judgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Judgment::ExtremelyLess => write!(f, "1/9"),
            Judgment::StronglyLess => write!(f, "1/5"),
            Judgment::Equal => write!(f, "1"),
            Judgment::Strongly => write!(f, "5"),
            Judgment::Extremely => write!(f, "9"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn judgment_try_from_ratio_accepts_scale_steps() {
        assert_eq!(Judgment::try_from_ratio(1.0 / 9.0).unwrap(), Judgment::ExtremelyLess);
        assert_eq!(Judgment::try_from_ratio(0.2).unwrap(), Judgment::StronglyLess);
        assert_eq!(Judgment::try_from_ratio(1.0).unwrap(), Judgment::Equal);
        assert_eq!(Judgment::try_from_ratio(5.0).unwrap(), Judgment::Strongly);
        assert_eq!(Judgment::try_from_ratio(9.0).unwrap(), Judgment::Extremely);
    }

    #[test]
    fn judgment_try_from_ratio_accepts_rounded_ninth() {
        assert_eq!(Judgment::try_from_ratio(0.111).unwrap(), Judgment::ExtremelyLess);
    }

    #[test]
    fn judgment_try_from_ratio_rejects_off_scale() {
        assert!(matches!(
            Judgment::try_from_ratio(3.0),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            Judgment::try_from_ratio(0.0),
            Err(ValidationError::NotPositive { .. })
        ));
        assert!(Judgment::try_from_ratio(-5.0).is_err());
        assert!(Judgment::try_from_ratio(f64::NAN).is_err());
    }

    #[test]
    fn judgment_reciprocal_inverts_ratio() {
        for j in Judgment::SCALE {
            assert!((j.ratio() * j.reciprocal().ratio() - 1.0).abs() < 1e-12);
            assert_eq!(j.reciprocal().reciprocal(), j);
        }
    }

    #[test]
    fn judgment_default_is_equal() {
        assert_eq!(Judgment::default(), Judgment::Equal);
    }

    #[test]
    fn judgment_displays_as_fraction() {
        assert_eq!(format!("{}", Judgment::ExtremelyLess), "1/9");
        assert_eq!(format!("{}", Judgment::Strongly), "5");
    }

    #[test]
    fn judgment_serializes_to_ratio() {
        let json = serde_json::to_string(&Judgment::Strongly).unwrap();
        assert_eq!(json, "5.0");
    }

    #[test]
    fn judgment_deserializes_from_ratio() {
        let j: Judgment = serde_json::from_str("0.2").unwrap();
        assert_eq!(j, Judgment::StronglyLess);

        let err = serde_json::from_str::<Judgment>("4.0");
        assert!(err.is_err());
    }
}
