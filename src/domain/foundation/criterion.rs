//! Criterion enum for the water-supply decision.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three criteria the supply options are compared on.
///
/// Ordering matches the rows of the comparison matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Cost,
    Availability,
    Accessibility,
}

impl Criterion {
    /// All criteria in matrix order.
    pub const ALL: [Criterion; 3] = [
        Criterion::Cost,
        Criterion::Availability,
        Criterion::Accessibility,
    ];

    /// Returns the row index of this criterion in the comparison matrix.
    pub fn index(&self) -> usize {
        match self {
            Criterion::Cost => 0,
            Criterion::Availability => 1,
            Criterion::Accessibility => 2,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Cost => "Cost",
            Criterion::Availability => "Availability",
            Criterion::Accessibility => "Accessibility",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criterion_indices_follow_matrix_order() {
        for (i, c) in Criterion::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn criterion_serializes_snake_case() {
        let json = serde_json::to_string(&Criterion::Availability).unwrap();
        assert_eq!(json, "\"availability\"");
    }
}
