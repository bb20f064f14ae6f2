//! Comparison Matrix - validated reciprocal pairwise-comparison matrix.

use std::str::FromStr;

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use super::AhpError;

/// Default tolerance on `M[i][j] * M[j][i] == 1` and on the unit diagonal.
pub const DEFAULT_RECIPROCITY_TOLERANCE: f64 = 1e-6;

/// A square, positive, reciprocal matrix with a unit diagonal.
///
/// Entry `(i, j)` says how much more important criterion `i` is than
/// criterion `j`. Instances can only be built through the validating
/// constructors, so downstream code never sees a malformed matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct ComparisonMatrix {
    values: DMatrix<f64>,
}

impl ComparisonMatrix {
    /// Builds a matrix from rows using the default reciprocity tolerance.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, AhpError> {
        Self::from_rows_with_tolerance(rows, DEFAULT_RECIPROCITY_TOLERANCE)
    }

    /// Builds a matrix from rows, checking every invariant.
    ///
    /// # Errors
    /// - fewer than 2 rows
    /// - any row whose length differs from the row count
    /// - any entry that is zero, negative, NaN or infinite
    /// - a diagonal entry further than `tolerance` from 1
    /// - a pair whose product is further than `tolerance` from 1
    pub fn from_rows_with_tolerance(rows: &[Vec<f64>], tolerance: f64) -> Result<Self, AhpError> {
        let n = rows.len();
        if n < 2 {
            return Err(AhpError::TooFewCriteria { order: n });
        }

        for (row, values) in rows.iter().enumerate() {
            if values.len() != n {
                return Err(AhpError::NotSquare {
                    row,
                    len: values.len(),
                    expected: n,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !value.is_finite() || value <= 0.0 {
                    return Err(AhpError::NonPositiveEntry { row, col, value });
                }
            }
        }

        for i in 0..n {
            let diagonal = rows[i][i];
            if (diagonal - 1.0).abs() > tolerance {
                return Err(AhpError::NonUnitDiagonal {
                    index: i,
                    value: diagonal,
                });
            }

            for j in (i + 1)..n {
                let value = rows[i][j];
                let mirror = rows[j][i];
                let product = value * mirror;
                if (product - 1.0).abs() > tolerance {
                    return Err(AhpError::NotReciprocal {
                        row: i,
                        col: j,
                        value,
                        mirror,
                        product,
                    });
                }
            }
        }

        Ok(Self {
            values: DMatrix::from_fn(n, n, |i, j| rows[i][j]),
        })
    }

    /// Builds a matrix of order `n` from its strict upper triangle.
    ///
    /// Entries are read row by row: `(0,1), (0,2), .., (1,2), ..`. The lower
    /// triangle is filled with reciprocals and the diagonal with ones.
    pub fn from_upper_triangle(n: usize, upper: &[f64]) -> Result<Self, AhpError> {
        if n < 2 {
            return Err(AhpError::TooFewCriteria { order: n });
        }

        let expected = n * (n - 1) / 2;
        if upper.len() != expected {
            return Err(AhpError::TriangleLength {
                order: n,
                expected,
                actual: upper.len(),
            });
        }

        let mut rows = vec![vec![1.0; n]; n];
        let mut entries = upper.iter();
        for i in 0..n {
            for j in (i + 1)..n {
                // Length was checked above.
                let value = entries.next().copied().unwrap_or(f64::NAN);
                if !value.is_finite() || value <= 0.0 {
                    return Err(AhpError::NonPositiveEntry { row: i, col: j, value });
                }
                rows[i][j] = value;
                rows[j][i] = 1.0 / value;
            }
        }

        Self::from_rows(&rows)
    }

    /// Parses a compact `"1,5,9;0.2,1,5;0.111,0.2,1"` matrix.
    ///
    /// Rows are separated by `;`, entries by `,`. Whitespace is ignored.
    pub fn parse_with_tolerance(text: &str, tolerance: f64) -> Result<Self, AhpError> {
        let rows = text
            .split(';')
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .enumerate()
            .map(|(row, entries)| {
                entries
                    .split(',')
                    .map(|entry| {
                        let entry = entry.trim();
                        entry.parse::<f64>().map_err(|_| AhpError::UnparsableEntry {
                            row,
                            text: entry.to_string(),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows_with_tolerance(&rows, tolerance)
    }

    /// Builds the all-ones matrix (every criterion equally important).
    pub fn uniform(n: usize) -> Result<Self, AhpError> {
        Self::from_upper_triangle(n, &vec![1.0; n.saturating_sub(1) * n / 2])
    }

    /// Returns the number of criteria.
    pub fn order(&self) -> usize {
        self.values.nrows()
    }

    /// Returns entry `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get((row, col)).copied()
    }

    /// Returns the underlying dense matrix.
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// Returns the matrix as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.values
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }
}

impl FromStr for ComparisonMatrix {
    type Err = AhpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with_tolerance(s, DEFAULT_RECIPROCITY_TOLERANCE)
    }
}

impl TryFrom<Vec<Vec<f64>>> for ComparisonMatrix {
    type Error = AhpError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<ComparisonMatrix> for Vec<Vec<f64>> {
    fn from(matrix: ComparisonMatrix) -> Self {
        matrix.to_rows()
    }
}
