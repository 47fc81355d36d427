//! Principal component analysis of the fixed-maturity panel.

use nalgebra::DMatrix;

use curva_curves::FixedMaturityPanel;
use curva_math::linear_algebra::symmetric_eigen_desc;
use curva_math::stats::{correlation_from_standardized, standardize_columns};

use crate::error::{FactorError, FactorResult};

/// Eigenvalues this close to zero from below are treated as zero.
const EIGENVALUE_TOLERANCE: f64 = 1e-10;

/// The result of a PCA run over a fixed-maturity panel.
///
/// Immutable once computed; holds the component loadings, the score
/// series, and the explained-variance ratios for all `k` components,
/// where `k` is the number of maturities on the grid.
///
/// # Sign Convention
///
/// The sign of each eigenvector is arbitrary in the underlying
/// decomposition. To make runs reproducible and comparable against the
/// naive factors, every component is flipped so the sum of its loadings
/// is positive. For the first component on yield data this makes all
/// loadings positive.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorDecomposition {
    loadings: DMatrix<f64>,
    scores: DMatrix<f64>,
    eigenvalues: Vec<f64>,
    explained_variance: Vec<f64>,
}

impl FactorDecomposition {
    /// Number of components (= number of maturities).
    #[must_use]
    pub fn num_components(&self) -> usize {
        self.eigenvalues.len()
    }

    /// Loading matrix: rows = maturities, columns = components.
    #[must_use]
    pub fn loadings(&self) -> &DMatrix<f64> {
        &self.loadings
    }

    /// Score matrix: rows = reference dates, columns = components.
    #[must_use]
    pub fn scores(&self) -> &DMatrix<f64> {
        &self.scores
    }

    /// Eigenvalues in descending order.
    #[must_use]
    pub fn eigenvalues(&self) -> &[f64] {
        &self.eigenvalues
    }

    /// Explained-variance ratios, one per component, summing to 1.
    #[must_use]
    pub fn explained_variance(&self) -> &[f64] {
        &self.explained_variance
    }

    /// The loading vector of one component across maturities.
    #[must_use]
    pub fn loading(&self, component: usize) -> Vec<f64> {
        self.loadings.column(component).iter().copied().collect()
    }

    /// The score series of one component across reference dates.
    #[must_use]
    pub fn score_series(&self, component: usize) -> Vec<f64> {
        self.scores.column(component).iter().copied().collect()
    }
}

/// Extracts principal components from a fixed-maturity panel.
///
/// Columns are standardized to zero mean and unit variance first, so
/// the decomposition acts on the correlation matrix and no maturity
/// dominates through raw variance. Scores are the standardized panel
/// projected onto the (sign-canonicalized) loadings.
///
/// # Errors
///
/// - `FactorError::InsufficientData` for fewer than 2 reference dates
///   or fewer than 2 maturities.
/// - `FactorError::Math` if a maturity column is constant.
/// - `FactorError::DecompositionFailed` if the eigen-decomposition
///   produces non-finite or materially negative eigenvalues.
pub fn extract_factors(panel: &FixedMaturityPanel) -> FactorResult<FactorDecomposition> {
    let matrix = panel.rates_matrix();
    let (rows, cols) = matrix.shape();
    if rows < 2 || cols < 2 {
        return Err(FactorError::insufficient_data(rows, cols));
    }

    let standardized = standardize_columns(&matrix)?;
    let corr = correlation_from_standardized(&standardized)?;
    let (raw_eigenvalues, mut loadings) = symmetric_eigen_desc(&corr)?;

    let mut eigenvalues: Vec<f64> = raw_eigenvalues.iter().copied().collect();
    for value in &mut eigenvalues {
        if !value.is_finite() {
            return Err(FactorError::decomposition_failed(
                "non-finite eigenvalue in correlation matrix",
            ));
        }
        // A correlation matrix is positive semi-definite; tiny negative
        // eigenvalues are numerical noise.
        if *value < 0.0 {
            if *value < -EIGENVALUE_TOLERANCE {
                return Err(FactorError::decomposition_failed(format!(
                    "negative eigenvalue {value} in correlation matrix"
                )));
            }
            *value = 0.0;
        }
    }

    let total: f64 = eigenvalues.iter().sum();
    if total <= 0.0 {
        return Err(FactorError::decomposition_failed(
            "correlation matrix carries no variance",
        ));
    }
    let explained_variance: Vec<f64> = eigenvalues.iter().map(|v| v / total).collect();

    // Canonicalize signs: flip any component whose loading sum is negative
    for j in 0..cols {
        let sum: f64 = loadings.column(j).iter().sum();
        if sum < 0.0 {
            for i in 0..cols {
                loadings[(i, j)] = -loadings[(i, j)];
            }
        }
    }

    let scores = &standardized * &loadings;

    Ok(FactorDecomposition {
        loadings,
        scores,
        eigenvalues,
        explained_variance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use curva_core::types::Date;
    use curva_curves::{FixedMaturityPanel, MaturityGrid};

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn parallel_shift_panel() -> FixedMaturityPanel {
        // All maturities move together: identical cross-maturity spread
        // on every date, level shifting +1% per day.
        let grid = MaturityGrid::new(vec![252, 504, 756]).unwrap();
        FixedMaturityPanel::from_rows(
            grid,
            vec![
                (date(2024, 1, 2), vec![0.10, 0.11, 0.12]),
                (date(2024, 1, 3), vec![0.11, 0.12, 0.13]),
                (date(2024, 1, 4), vec![0.12, 0.13, 0.14]),
            ],
        )
        .unwrap()
    }

    fn mixed_panel() -> FixedMaturityPanel {
        let grid = MaturityGrid::new(vec![252, 504, 756]).unwrap();
        FixedMaturityPanel::from_rows(
            grid,
            vec![
                (date(2024, 1, 2), vec![0.100, 0.112, 0.121]),
                (date(2024, 1, 3), vec![0.108, 0.113, 0.119]),
                (date(2024, 1, 4), vec![0.103, 0.117, 0.125]),
                (date(2024, 1, 5), vec![0.112, 0.118, 0.122]),
                (date(2024, 1, 8), vec![0.107, 0.121, 0.130]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_parallel_shift_is_one_factor() {
        let decomposition = extract_factors(&parallel_shift_panel()).unwrap();

        assert_relative_eq!(decomposition.explained_variance()[0], 1.0, epsilon = 1e-9);
        // Equal loadings across maturities, positive by convention
        let pc1 = decomposition.loading(0);
        for loading in &pc1 {
            assert_relative_eq!(*loading, 1.0 / 3.0_f64.sqrt(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_variance_ratios_sum_to_one() {
        let decomposition = extract_factors(&mixed_panel()).unwrap();
        let sum: f64 = decomposition.explained_variance().iter().sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-9);
        for ratio in decomposition.explained_variance() {
            assert!(*ratio >= 0.0);
        }
    }

    #[test]
    fn test_loadings_unit_norm() {
        let decomposition = extract_factors(&mixed_panel()).unwrap();
        for j in 0..decomposition.num_components() {
            let norm_sq: f64 = decomposition.loading(j).iter().map(|v| v * v).sum();
            assert_relative_eq!(norm_sq, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_sign_convention() {
        let decomposition = extract_factors(&mixed_panel()).unwrap();
        for j in 0..decomposition.num_components() {
            let sum: f64 = decomposition.loading(j).iter().sum();
            assert!(sum >= 0.0, "component {j} loading sum is negative");
        }
    }

    #[test]
    fn test_deterministic() {
        let a = extract_factors(&mixed_panel()).unwrap();
        let b = extract_factors(&mixed_panel()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_row_panel_fails() {
        let grid = MaturityGrid::new(vec![252, 504]).unwrap();
        let panel = FixedMaturityPanel::from_rows(
            grid,
            vec![(date(2024, 1, 2), vec![0.10, 0.11])],
        )
        .unwrap();

        assert!(matches!(
            extract_factors(&panel),
            Err(FactorError::InsufficientData { rows: 1, .. })
        ));
    }

    #[test]
    fn test_constant_column_fails_cleanly() {
        let grid = MaturityGrid::new(vec![252, 504]).unwrap();
        let panel = FixedMaturityPanel::from_rows(
            grid,
            vec![
                (date(2024, 1, 2), vec![0.10, 0.11]),
                (date(2024, 1, 3), vec![0.10, 0.12]),
            ],
        )
        .unwrap();

        // First column is constant; must surface an error, not NaNs
        assert!(extract_factors(&panel).is_err());
    }

    #[test]
    fn test_scores_shape() {
        let decomposition = extract_factors(&mixed_panel()).unwrap();
        assert_eq!(decomposition.scores().shape(), (5, 3));
        assert_eq!(decomposition.loadings().shape(), (3, 3));
        assert_eq!(decomposition.score_series(0).len(), 5);
    }
}
