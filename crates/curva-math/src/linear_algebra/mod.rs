//! Linear algebra utilities.
//!
//! This module wraps the matrix decompositions needed for factor
//! analysis in a fallible interface.

use nalgebra::{DMatrix, DVector, SymmetricEigen};

use crate::error::{MathError, MathResult};

/// Eigen-decomposition of a symmetric matrix, sorted by descending
/// eigenvalue.
///
/// Returns `(eigenvalues, eigenvectors)` where column `i` of the
/// eigenvector matrix corresponds to `eigenvalues[i]`, and
/// `eigenvalues[0] >= eigenvalues[1] >= ...`.
///
/// The sign of each eigenvector is arbitrary at this layer; callers
/// that need a reproducible orientation must canonicalize it themselves.
/// The relative order of numerically equal eigenvalues follows the sort
/// and is not guaranteed stable across linear-algebra backends.
///
/// # Errors
///
/// Returns `MathError::DimensionMismatch` if the matrix is not square,
/// and `MathError::InvalidInput` if it contains non-finite entries.
pub fn symmetric_eigen_desc(matrix: &DMatrix<f64>) -> MathResult<(DVector<f64>, DMatrix<f64>)> {
    let (rows, cols) = matrix.shape();
    if rows != cols {
        return Err(MathError::DimensionMismatch {
            rows1: rows,
            cols1: cols,
            rows2: cols,
            cols2: rows,
        });
    }
    if matrix.iter().any(|v| !v.is_finite()) {
        return Err(MathError::invalid_input(
            "matrix contains non-finite entries",
        ));
    }

    let eigen = SymmetricEigen::new(matrix.clone());
    let n = rows;

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        eigen.eigenvalues[b]
            .partial_cmp(&eigen.eigenvalues[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let values = DVector::from_iterator(n, order.iter().map(|&i| eigen.eigenvalues[i]));
    let mut vectors = DMatrix::zeros(n, n);
    for (dst, &src) in order.iter().enumerate() {
        vectors.set_column(dst, &eigen.eigenvectors.column(src));
    }

    Ok((values, vectors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_diagonal_matrix() {
        let m = DMatrix::from_row_slice(3, 3, &[2.0, 0.0, 0.0, 0.0, 5.0, 0.0, 0.0, 0.0, 1.0]);
        let (values, vectors) = symmetric_eigen_desc(&m).unwrap();

        assert_relative_eq!(values[0], 5.0, epsilon = 1e-10);
        assert_relative_eq!(values[1], 2.0, epsilon = 1e-10);
        assert_relative_eq!(values[2], 1.0, epsilon = 1e-10);
        // Leading eigenvector picks out the second axis
        assert_relative_eq!(vectors.column(0)[1].abs(), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_eigenpairs_satisfy_definition() {
        let m = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 2.0]);
        let (values, vectors) = symmetric_eigen_desc(&m).unwrap();

        // Eigenvalues of [[2,1],[1,2]] are 3 and 1
        assert_relative_eq!(values[0], 3.0, epsilon = 1e-10);
        assert_relative_eq!(values[1], 1.0, epsilon = 1e-10);

        for i in 0..2 {
            let v = vectors.column(i);
            let av = &m * v;
            for j in 0..2 {
                assert_relative_eq!(av[j], values[i] * v[j], epsilon = 1e-10);
            }
            // Unit norm
            assert_relative_eq!(v.norm(), 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_non_square_rejected() {
        let m = DMatrix::from_row_slice(2, 3, &[1.0; 6]);
        assert!(symmetric_eigen_desc(&m).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        let m = DMatrix::from_row_slice(2, 2, &[1.0, f64::NAN, f64::NAN, 1.0]);
        assert!(symmetric_eigen_desc(&m).is_err());
    }
}
