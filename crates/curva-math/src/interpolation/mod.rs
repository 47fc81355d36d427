//! Interpolation methods for yield curve construction.
//!
//! This module provides the interpolation algorithms used when building
//! zero curves from a sparse set of market-implied rates.
//!
//! # Available Methods
//!
//! - [`LinearInterpolator`]: Simple linear interpolation
//! - [`CubicSpline`]: Natural cubic spline interpolation (curve default)
//!
//! All interpolators refuse to evaluate outside their data range unless
//! extrapolation is explicitly enabled; the curve pipeline never enables
//! it.

mod cubic_spline;
mod linear;

pub use cubic_spline::CubicSpline;
pub use linear::LinearInterpolator;

use crate::error::MathResult;

/// Trait for interpolation methods.
///
/// All interpolation methods implement this trait, providing a unified
/// interface for curve construction.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns true if extrapolation is allowed.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}
