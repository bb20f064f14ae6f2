//! Random Index table - Saaty's average consistency index of random matrices.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Divisor used for matrix orders the table does not cover.
pub const UNTABULATED_DIVISOR: f64 = 1.0;

/// Process-wide random index table, built on first use and never mutated.
pub static RANDOM_INDEX: Lazy<RandomIndexTable> = Lazy::new(RandomIndexTable::saaty);

/// Read-only mapping from matrix order to random index.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomIndexTable {
    values: BTreeMap<usize, f64>,
}

impl RandomIndexTable {
    /// Saaty's values for orders 3 to 5.
    fn saaty() -> Self {
        Self {
            values: BTreeMap::from([(3, 0.58), (4, 0.90), (5, 1.12)]),
        }
    }

    /// Returns the random index for order `n`, if tabulated.
    pub fn get(&self, n: usize) -> Option<f64> {
        self.values.get(&n).copied()
    }

    /// Returns the CI divisor for order `n`, falling back to 1.0.
    pub fn divisor(&self, n: usize) -> f64 {
        self.get(n).unwrap_or(UNTABULATED_DIVISOR)
    }

    /// Returns true if order `n` has a tabulated value.
    pub fn covers(&self, n: usize) -> bool {
        self.values.contains_key(&n)
    }

    /// Returns the tabulated orders in ascending order.
    pub fn orders(&self) -> impl Iterator<Item = usize> + '_ {
        self.values.keys().copied()
    }
}
