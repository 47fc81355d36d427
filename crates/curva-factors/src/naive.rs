//! Hand-built level, slope, and curvature factors.
//!
//! Computed directly from panel rows with no dependency on the PCA
//! output; these are the reference statistics the principal components
//! are compared against.

use serde::{Deserialize, Serialize};

use curva_core::types::Date;
use curva_curves::FixedMaturityPanel;
use curva_math::stats::mean;

use crate::error::{FactorError, FactorResult};

/// Short-end maturity (1 year) on the standard DI grid.
pub const SHORT_DAYS: u32 = 252;
/// Long-end maturity (10 years) on the standard DI grid.
pub const LONG_DAYS: u32 = 2520;
/// Belly maturities (4 to 7 years) on the standard DI grid.
pub const BELLY_DAYS: [u32; 4] = [1008, 1260, 1512, 1764];

/// Naive yield curve factors for one reference date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NaiveFactors {
    /// Arithmetic mean of all fixed-maturity rates.
    pub level: f64,
    /// Long-end rate minus short-end rate.
    pub slope: f64,
    /// Twice the belly mean minus the sum of the two ends.
    pub curvature: f64,
}

/// Computes naive factors per date on the standard DI grid:
/// level = mean of all maturities, slope = 10Y - 1Y,
/// curvature = 2 * mean(4Y..7Y) - (1Y + 10Y).
///
/// # Errors
///
/// Returns `FactorError::MissingMaturity` if the panel's grid lacks any
/// of the referenced maturities.
pub fn naive_factors(panel: &FixedMaturityPanel) -> FactorResult<Vec<(Date, NaiveFactors)>> {
    naive_factors_with(panel, SHORT_DAYS, LONG_DAYS, &BELLY_DAYS)
}

/// Computes naive factors with explicit short, long, and belly
/// maturities, for non-standard grids.
///
/// # Errors
///
/// Returns `FactorError::MissingMaturity` for any maturity absent from
/// the grid.
pub fn naive_factors_with(
    panel: &FixedMaturityPanel,
    short_days: u32,
    long_days: u32,
    belly_days: &[u32],
) -> FactorResult<Vec<(Date, NaiveFactors)>> {
    let grid = panel.grid();

    let index = |days: u32| -> FactorResult<usize> {
        grid.index_of(days)
            .ok_or(FactorError::MissingMaturity {
                business_days: days,
            })
    };

    let short = index(short_days)?;
    let long = index(long_days)?;
    let belly: Vec<usize> = belly_days
        .iter()
        .map(|&d| index(d))
        .collect::<FactorResult<_>>()?;

    let mut factors = Vec::with_capacity(panel.len());
    for (i, &date) in panel.dates().iter().enumerate() {
        let row = panel.row(i);
        let belly_rates: Vec<f64> = belly.iter().map(|&j| row[j]).collect();

        factors.push((
            date,
            NaiveFactors {
                level: mean(row),
                slope: row[long] - row[short],
                curvature: 2.0 * mean(&belly_rates) - (row[short] + row[long]),
            },
        ));
    }

    Ok(factors)
}
