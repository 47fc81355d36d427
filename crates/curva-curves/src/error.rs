//! Error types for curve operations.
//!
//! This module provides structured error handling for settlement record
//! parsing, rate derivation, curve construction, and panel resampling.

use curva_core::CoreError;
use curva_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone)]
pub enum CurveError {
    /// Requested maturity is outside the curve's valid range.
    #[error("Maturity {requested} business days out of range [{min}, {max}]")]
    MaturityOutOfRange {
        /// The requested maturity in business days.
        requested: u32,
        /// Minimum maturity on the curve.
        min: u32,
        /// Maximum maturity on the curve.
        max: u32,
    },

    /// Business-day maturities are not strictly increasing.
    #[error("Non-monotonic maturities at index {index}: {prev} >= {current}")]
    NonMonotonicMaturities {
        /// Index where monotonicity violation occurred.
        index: usize,
        /// Previous maturity value.
        prev: u32,
        /// Current maturity value.
        current: u32,
    },

    /// Not enough rate points to build a curve.
    #[error("Insufficient points: need at least {required}, got {got}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of points provided.
        got: usize,
    },

    /// Settlement price cannot imply a rate.
    #[error("Invalid price {price}: {reason}")]
    InvalidPrice {
        /// The offending price.
        price: f64,
        /// Reason for invalidity.
        reason: String,
    },

    /// Malformed settlement record.
    #[error("Invalid record: {reason}")]
    InvalidRecord {
        /// Description of the problem.
        reason: String,
    },

    /// Contract code does not encode a valid maturity.
    #[error("Bad contract code: {code}")]
    BadContractCode {
        /// The unparseable code.
        code: String,
    },

    /// No reference date survived filtering; the panel is empty.
    #[error("Empty panel: no reference date covers the full maturity grid")]
    EmptyPanel,

    /// CSV parsing failure at the reader level.
    #[error("CSV error: {0}")]
    Csv(String),

    /// Error propagated from core types or calendars.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Error propagated from interpolation or statistics.
    #[error(transparent)]
    Math(#[from] MathError),
}

impl CurveError {
    /// Creates an invalid record error.
    #[must_use]
    pub fn invalid_record(reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            reason: reason.into(),
        }
    }

    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(price: f64, reason: impl Into<String>) -> Self {
        Self::InvalidPrice {
            price,
            reason: reason.into(),
        }
    }

    /// Creates a bad contract code error.
    #[must_use]
    pub fn bad_contract_code(code: impl Into<String>) -> Self {
        Self::BadContractCode { code: code.into() }
    }
}
