//! Error types for factor extraction.

use curva_math::MathError;
use thiserror::Error;

/// A specialized Result type for factor operations.
pub type FactorResult<T> = Result<T, FactorError>;

/// Error types for factor extraction.
#[derive(Error, Debug, Clone)]
pub enum FactorError {
    /// The panel is too small for a meaningful decomposition.
    #[error("Insufficient data: panel is {rows}x{cols}, need at least {required_rows}x{required_cols}")]
    InsufficientData {
        /// Minimum required reference dates.
        required_rows: usize,
        /// Minimum required maturities.
        required_cols: usize,
        /// Actual reference dates.
        rows: usize,
        /// Actual maturities.
        cols: usize,
    },

    /// A maturity required by a factor definition is not on the grid.
    #[error("Missing maturity: grid has no {business_days} business-day column")]
    MissingMaturity {
        /// The absent maturity in business days.
        business_days: u32,
    },

    /// The eigen-decomposition failed.
    #[error("Decomposition failed: {reason}")]
    DecompositionFailed {
        /// Description of the failure.
        reason: String,
    },

    /// Error propagated from statistics or linear algebra.
    #[error(transparent)]
    Math(#[from] MathError),
}

impl FactorError {
    /// Creates an insufficient data error for a panel shape.
    #[must_use]
    pub fn insufficient_data(rows: usize, cols: usize) -> Self {
        Self::InsufficientData {
            required_rows: 2,
            required_cols: 2,
            rows,
            cols,
        }
    }

    /// Creates a decomposition failure error.
    #[must_use]
    pub fn decomposition_failed(reason: impl Into<String>) -> Self {
        Self::DecompositionFailed {
            reason: reason.into(),
        }
    }
}
