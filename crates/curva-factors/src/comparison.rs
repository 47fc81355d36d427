//! Comparison of PCA scores against the naive factors.
//!
//! PC1, PC2, and PC3 are expected (not guaranteed) to track level,
//! slope, and curvature. This module quantifies that with Pearson
//! correlations; nothing here feeds back into curve construction.

use curva_core::types::Date;
use curva_math::stats::{mean, sample_std};

use crate::error::{FactorError, FactorResult};
use crate::naive::NaiveFactors;
use crate::pca::FactorDecomposition;

/// Pearson correlation between two equally long series.
///
/// # Errors
///
/// Returns an error for mismatched lengths, fewer than 2 observations,
/// or a constant series.
pub fn pearson(a: &[f64], b: &[f64]) -> FactorResult<f64> {
    if a.len() != b.len() {
        return Err(FactorError::decomposition_failed(format!(
            "series lengths differ: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    let std_a = sample_std(a)?;
    let std_b = sample_std(b)?;
    if std_a == 0.0 || std_b == 0.0 {
        return Err(FactorError::decomposition_failed(
            "cannot correlate a constant series",
        ));
    }

    let mean_a = mean(a);
    let mean_b = mean(b);
    let cov: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (x - mean_a) * (y - mean_b))
        .sum::<f64>()
        / (a.len() - 1) as f64;

    Ok(cov / (std_a * std_b))
}

/// Correlates the first three component scores against the naive
/// level, slope, and curvature series.
///
/// Returns `[corr(PC1, level), corr(PC2, slope), corr(PC3, curvature)]`.
///
/// # Errors
///
/// Returns `FactorError::InsufficientData` if the decomposition has
/// fewer than 3 components or the series lengths do not match.
pub fn score_correlations(
    decomposition: &FactorDecomposition,
    naive: &[(Date, NaiveFactors)],
) -> FactorResult<[f64; 3]> {
    if decomposition.num_components() < 3 {
        return Err(FactorError::InsufficientData {
            required_rows: 2,
            required_cols: 3,
            rows: decomposition.scores().nrows(),
            cols: decomposition.num_components(),
        });
    }

    let levels: Vec<f64> = naive.iter().map(|(_, f)| f.level).collect();
    let slopes: Vec<f64> = naive.iter().map(|(_, f)| f.slope).collect();
    let curvatures: Vec<f64> = naive.iter().map(|(_, f)| f.curvature).collect();

    Ok([
        pearson(&decomposition.score_series(0), &levels)?,
        pearson(&decomposition.score_series(1), &slopes)?,
        pearson(&decomposition.score_series(2), &curvatures)?,
    ])
}
