//! Descriptive statistics for panel data.
//!
//! Provides the column-wise standardization and correlation matrix used
//! by the factor extraction stage. Standardizing each column before the
//! eigen-decomposition makes the decomposition act on the correlation
//! matrix rather than the covariance matrix, so no column dominates
//! purely through higher raw variance.

use nalgebra::DMatrix;

use crate::error::{MathError, MathResult};

/// Arithmetic mean of a slice.
///
/// Returns 0.0 for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n-1 denominator).
///
/// # Errors
///
/// Returns `MathError::InsufficientData` for fewer than 2 values.
pub fn sample_std(values: &[f64]) -> MathResult<f64> {
    if values.len() < 2 {
        return Err(MathError::insufficient_data(2, values.len()));
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    Ok((ss / (values.len() - 1) as f64).sqrt())
}

/// Standardizes each column of a matrix to zero mean and unit variance.
///
/// # Errors
///
/// - `MathError::InsufficientData` if the matrix has fewer than 2 rows.
/// - `MathError::ZeroVariance` if any column is constant.
pub fn standardize_columns(matrix: &DMatrix<f64>) -> MathResult<DMatrix<f64>> {
    let (rows, cols) = matrix.shape();
    if rows < 2 {
        return Err(MathError::insufficient_data(2, rows));
    }

    let mut out = matrix.clone();
    for j in 0..cols {
        let column: Vec<f64> = matrix.column(j).iter().copied().collect();
        let m = mean(&column);
        let s = sample_std(&column)?;
        if s == 0.0 || !s.is_finite() {
            return Err(MathError::ZeroVariance { column: j });
        }
        for i in 0..rows {
            out[(i, j)] = (matrix[(i, j)] - m) / s;
        }
    }

    Ok(out)
}

/// Sample correlation matrix of the columns of `matrix`.
///
/// Columns are standardized internally; the result is symmetric with a
/// unit diagonal.
///
/// # Errors
///
/// Propagates the errors of [`standardize_columns`], and requires at
/// least 2 columns.
pub fn correlation_matrix(matrix: &DMatrix<f64>) -> MathResult<DMatrix<f64>> {
    let z = standardize_columns(matrix)?;
    correlation_from_standardized(&z)
}

/// Sample correlation matrix from an already-standardized matrix.
///
/// `z` must have zero-mean, unit-variance columns (as produced by
/// [`standardize_columns`]); the result is then `zᵀz / (n - 1)`,
/// symmetric with a unit diagonal.
///
/// # Errors
///
/// Returns `MathError::InsufficientData` for fewer than 2 rows or
/// fewer than 2 columns.
pub fn correlation_from_standardized(z: &DMatrix<f64>) -> MathResult<DMatrix<f64>> {
    let (rows, cols) = z.shape();
    if rows < 2 {
        return Err(MathError::insufficient_data(2, rows));
    }
    if cols < 2 {
        return Err(MathError::insufficient_data(2, cols));
    }

    let mut corr = z.transpose() * z;
    corr /= (rows - 1) as f64;

    // Clamp the diagonal against floating-point drift
    for j in 0..cols {
        corr[(j, j)] = 1.0;
    }

    Ok(corr)
}
