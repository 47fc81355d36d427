//! # Curva Factors
//!
//! Latent factor extraction for fixed-maturity rate panels.
//!
//! This crate implements the analysis half of Curva:
//!
//! - **PCA**: eigen-decomposition of the panel's correlation matrix,
//!   yielding component loadings, score series, and explained-variance
//!   ratios, with a documented eigenvector sign convention
//! - **Naive factors**: hand-built level, slope, and curvature
//!   statistics computed directly from panel rows
//! - **Comparison**: correlation of PCA scores against the naive
//!   factors, the textbook "level, slope, curvature" check
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use curva_factors::prelude::*;
//!
//! let decomposition = extract_factors(&panel)?;
//! let naive = naive_factors(&panel)?;
//! let corr = score_correlations(&decomposition, &naive)?;
//!
//! // PC1 is expected to track the level factor
//! assert!(corr[0].abs() > 0.9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod comparison;
pub mod error;
pub mod naive;
pub mod pca;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::comparison::score_correlations;
    pub use crate::error::{FactorError, FactorResult};
    pub use crate::naive::{naive_factors, NaiveFactors};
    pub use crate::pca::{extract_factors, FactorDecomposition};
}

pub use comparison::score_correlations;
pub use error::{FactorError, FactorResult};
pub use naive::{naive_factors, NaiveFactors};
pub use pca::{extract_factors, FactorDecomposition};
