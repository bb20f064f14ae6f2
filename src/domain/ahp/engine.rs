//! AHP Engine - priority weights and consistency ratio for a comparison matrix.

use nalgebra::linalg::Schur;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AhpError, ComparisonMatrix, RandomIndexTable, RANDOM_INDEX};

/// Conventional upper bound for an acceptable consistency ratio.
pub const CONSISTENCY_THRESHOLD: f64 = 0.1;

/// How priority weights are derived from the matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightMethod {
    /// Mean of each row after dividing every column by its sum.
    ///
    /// Closed-form approximation of the principal eigenvector.
    #[default]
    ColumnNormalization,
    /// Principal right eigenvector by power iteration.
    ///
    /// Gives different weights than the default on inconsistent matrices.
    PrincipalEigenvector,
}

/// Whether the consistency ratio was divided by a tabulated random index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyScale {
    /// CR = CI / RI(n).
    Normalized,
    /// n is not tabulated; CR = CI.
    Unscaled,
}

/// Tunables for the numerical parts of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineOptions {
    pub weight_method: WeightMethod,
    /// Convergence tolerance for the Schur decomposition and power iteration.
    pub eigen_epsilon: f64,
    /// Iteration cap for the Schur decomposition and power iteration.
    pub eigen_max_iterations: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            weight_method: WeightMethod::ColumnNormalization,
            eigen_epsilon: 1e-12,
            eigen_max_iterations: 1_000,
        }
    }
}

/// Output of one engine run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AhpResult {
    /// One weight per criterion, non-negative, summing to 1.
    pub weights: Vec<f64>,
    pub consistency_ratio: f64,
    pub consistency_index: f64,
    /// Largest real part among the matrix eigenvalues.
    pub lambda_max: f64,
    /// Random index used as divisor, `None` when the order is untabulated.
    pub random_index: Option<f64>,
    pub scale: ConsistencyScale,
    pub method: WeightMethod,
}

impl AhpResult {
    /// Number of criteria.
    pub fn order(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if CR is strictly below `threshold`.
    pub fn is_consistent(&self, threshold: f64) -> bool {
        self.consistency_ratio < threshold
    }

    /// Returns true if CR was not normalized by a random index.
    pub fn is_approximate(&self) -> bool {
        self.scale == ConsistencyScale::Unscaled
    }

    /// Returns the `(weights, cr)` pair.
    pub fn into_parts(self) -> (Vec<f64>, f64) {
        (self.weights, self.consistency_ratio)
    }
}

/// Stateless AHP weight-and-consistency engine.
///
/// Safe to share across threads; each call only touches its own input.
#[derive(Debug, Clone, Copy)]
pub struct AhpEngine {
    options: EngineOptions,
    random_index: &'static RandomIndexTable,
}

impl Default for AhpEngine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

impl AhpEngine {
    /// Creates an engine backed by the process-wide random index table.
    pub fn new(options: EngineOptions) -> Self {
        Self {
            options,
            random_index: &RANDOM_INDEX,
        }
    }

    /// Returns the engine options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Computes priority weights and the consistency ratio.
    ///
    /// # Algorithm
    /// - weights: see [`WeightMethod`]
    /// - `lambda_max`: largest real part of the eigenvalues of the matrix
    /// - `CI = max(0, (lambda_max - n) / (n - 1))`
    /// - `CR = CI / RI(n)`, or `CI` when n is not tabulated
    ///
    /// # Errors
    /// - `EigenSolveFailed` if the Schur decomposition or power iteration
    ///   does not converge
    /// - `NonFiniteResult` if any output is NaN or infinite
    pub fn compute_weights(&self, matrix: &ComparisonMatrix) -> Result<AhpResult, AhpError> {
        let m = matrix.as_matrix();
        let n = matrix.order();

        let weights = match self.options.weight_method {
            WeightMethod::ColumnNormalization => column_normalized_weights(m),
            WeightMethod::PrincipalEigenvector => self.principal_eigenvector(m)?,
        };
        if weights.iter().any(|w| !w.is_finite()) {
            return Err(AhpError::NonFiniteResult { quantity: "weight" });
        }

        let lambda_max = self.lambda_max(m)?;
        // lambda_max >= n for positive reciprocal matrices; below n is rounding noise.
        let consistency_index = ((lambda_max - n as f64) / (n as f64 - 1.0)).max(0.0);

        let random_index = self.random_index.get(n);
        let scale = if random_index.is_some() {
            ConsistencyScale::Normalized
        } else {
            debug!(order = n, "No random index for matrix order, using unscaled CI");
            ConsistencyScale::Unscaled
        };
        let consistency_ratio = consistency_index / self.random_index.divisor(n);

        if !consistency_ratio.is_finite() {
            return Err(AhpError::NonFiniteResult {
                quantity: "consistency ratio",
            });
        }

        debug!(
            order = n,
            lambda_max,
            consistency_index,
            consistency_ratio,
            "Computed AHP weights"
        );

        Ok(AhpResult {
            weights,
            consistency_ratio,
            consistency_index,
            lambda_max,
            random_index,
            scale,
            method: self.options.weight_method,
        })
    }

    /// Largest real part among the eigenvalues of `m`.
    ///
    /// The spectrum is shifted by `n` before the Schur decomposition so the
    /// zero eigenvalues of rank-deficient (perfectly consistent) matrices do
    /// not stall the relative convergence test. If the decomposition still
    /// fails, the Perron root is used: for a strictly positive matrix it is
    /// the eigenvalue with the largest real part.
    fn lambda_max(&self, m: &DMatrix<f64>) -> Result<f64, AhpError> {
        let n = m.nrows();
        let shift = n as f64;
        let shifted = m + DMatrix::<f64>::identity(n, n) * shift;

        let lambda_max = match Schur::try_new(
            shifted,
            self.options.eigen_epsilon,
            self.options.eigen_max_iterations,
        ) {
            Some(schur) => {
                schur
                    .complex_eigenvalues()
                    .iter()
                    .map(|eigenvalue| eigenvalue.re)
                    .fold(f64::NEG_INFINITY, f64::max)
                    - shift
            }
            None => {
                debug!(order = n, "Schur decomposition did not converge, using Perron root");
                let w = DVector::from_vec(self.principal_eigenvector(m)?);
                (m * &w).sum()
            }
        };

        if lambda_max.is_finite() {
            Ok(lambda_max)
        } else {
            Err(AhpError::NonFiniteResult {
                quantity: "principal eigenvalue",
            })
        }
    }

    /// Power iteration on `m`, L1-normalized each step.
    fn principal_eigenvector(&self, m: &DMatrix<f64>) -> Result<Vec<f64>, AhpError> {
        let n = m.nrows();
        let mut current = DVector::from_element(n, 1.0 / n as f64);

        for _ in 0..self.options.eigen_max_iterations {
            let mut next = m * &current;
            let next_sum: f64 = next.iter().sum();
            if next_sum <= 0.0 || !next_sum.is_finite() {
                return Err(AhpError::NonFiniteResult {
                    quantity: "eigenvector",
                });
            }
            next /= next_sum;

            let l1_delta: f64 = next
                .iter()
                .zip(current.iter())
                .map(|(a, b)| (a - b).abs())
                .sum();
            current = next;
            if l1_delta <= self.options.eigen_epsilon {
                return Ok(current.iter().copied().collect());
            }
        }

        Err(AhpError::EigenSolveFailed {
            max_iterations: self.options.eigen_max_iterations,
        })
    }
}

/// Divides each column by its sum, then averages each row.
fn column_normalized_weights(m: &DMatrix<f64>) -> Vec<f64> {
    let n = m.nrows();
    let mut normalized = m.clone();
    for col in 0..n {
        let sum: f64 = m.column(col).iter().sum();
        for row in 0..n {
            normalized[(row, col)] /= sum;
        }
    }

    (0..n)
        .map(|row| normalized.row(row).iter().sum::<f64>() / n as f64)
        .collect()
}

/// Computes `(weights, cr)` with the default engine.
pub fn compute_weights(matrix: &ComparisonMatrix) -> Result<(Vec<f64>, f64), AhpError> {
    AhpEngine::default()
        .compute_weights(matrix)
        .map(AhpResult::into_parts)
}
