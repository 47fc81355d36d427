//! # Curva Math
//!
//! Mathematical utilities for the Curva rate analytics library.
//!
//! This crate provides:
//!
//! - **Interpolation**: Numerical interpolation methods (natural cubic
//!   spline, linear) with strict domain enforcement
//! - **Statistics**: Column standardization and correlation matrices
//! - **Linear Algebra**: Symmetric eigen-decomposition for PCA
//!
//! ## Design Philosophy
//!
//! - **Numerical Stability**: Careful handling of edge cases
//! - **No Silent Extrapolation**: Interpolators fail loudly outside
//!   their domain unless extrapolation is explicitly enabled

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod interpolation;
pub mod linear_algebra;
pub mod stats;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{CubicSpline, Interpolator, LinearInterpolator};
    pub use crate::linear_algebra::symmetric_eigen_desc;
    pub use crate::stats::{
        correlation_from_standardized, correlation_matrix, mean, sample_std,
        standardize_columns,
    };
}

pub use error::{MathError, MathResult};
