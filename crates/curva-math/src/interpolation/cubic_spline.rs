//! Natural cubic spline interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::Interpolator;

/// Natural cubic spline interpolation.
///
/// Constructs a smooth curve through data points using piecewise cubic
/// polynomials with continuous first and second derivatives.
///
/// "Natural" means the second derivative is zero at the endpoints.
///
/// This is the default method for interpolating zero rates across
/// business-day maturities.
///
/// # Example
///
/// ```rust
/// use curva_math::interpolation::{CubicSpline, Interpolator};
///
/// // Rates observed at 21, 63, 126, and 252 business days
/// let days = vec![21.0, 63.0, 126.0, 252.0];
/// let rates = vec![0.1065, 0.1042, 0.1031, 0.1048];
///
/// let spline = CubicSpline::new(days, rates).unwrap();
/// let rate = spline.interpolate(180.0).unwrap();
/// assert!(rate > 0.10 && rate < 0.11);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivatives at each knot
    y2s: Vec<f64>,
    allow_extrapolation: bool,
}

impl CubicSpline {
    /// Creates a natural cubic spline interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (must be sorted in ascending order)
    /// * `ys` - Y coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 3 points, if lengths
    /// differ, or if the x values are not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        if xs.len() < 3 {
            return Err(MathError::insufficient_data(3, xs.len()));
        }
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        for i in 1..xs.len() {
            if xs[i] <= xs[i - 1] {
                return Err(MathError::invalid_input(
                    "x values must be strictly increasing",
                ));
            }
        }

        let y2s = second_derivatives(&xs, &ys);

        Ok(Self {
            xs,
            ys,
            y2s,
            allow_extrapolation: false,
        })
    }

    /// Enables extrapolation beyond the data range.
    ///
    /// The curve pipeline never enables this; out-of-domain maturities
    /// are dropped instead.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    /// Finds the index i such that xs[i] <= x < xs[i+1].
    fn segment(&self, x: f64) -> usize {
        match self.xs.binary_search_by(|probe| {
            probe.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal)
        }) {
            Ok(i) => i.min(self.xs.len() - 2),
            Err(i) => (i.saturating_sub(1)).min(self.xs.len() - 2),
        }
    }
}

impl Interpolator for CubicSpline {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        let n = self.xs.len();
        if !self.allow_extrapolation && (x < self.xs[0] || x > self.xs[n - 1]) {
            return Err(MathError::ExtrapolationNotAllowed {
                x,
                min: self.xs[0],
                max: self.xs[n - 1],
            });
        }

        let i = self.segment(x);

        let h = self.xs[i + 1] - self.xs[i];
        let a = (self.xs[i + 1] - x) / h;
        let b = (x - self.xs[i]) / h;

        let y = a * self.ys[i]
            + b * self.ys[i + 1]
            + ((a * a * a - a) * self.y2s[i] + (b * b * b - b) * self.y2s[i + 1]) * (h * h) / 6.0;

        Ok(y)
    }

    fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

/// Computes the knot second derivatives for a natural cubic spline.
///
/// Solves the underlying tridiagonal system in place with the natural
/// boundary condition y''(x0) = y''(xn) = 0.
fn second_derivatives(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let mut y2s = vec![0.0; n];
    let mut u = vec![0.0; n - 1];

    for i in 1..n - 1 {
        let sig = (xs[i] - xs[i - 1]) / (xs[i + 1] - xs[i - 1]);
        let p = sig * y2s[i - 1] + 2.0;
        y2s[i] = (sig - 1.0) / p;
        u[i] = (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i])
            - (ys[i] - ys[i - 1]) / (xs[i] - xs[i - 1]);
        u[i] = (6.0 * u[i] / (xs[i + 1] - xs[i - 1]) - sig * u[i - 1]) / p;
    }

    y2s[n - 1] = 0.0;
    for i in (0..n - 1).rev() {
        y2s[i] = y2s[i] * y2s[i + 1] + u[i];
    }

    y2s
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_passes_through_knots() {
        let xs = vec![21.0, 63.0, 126.0, 252.0, 504.0];
        let ys = vec![0.1065, 0.1042, 0.1031, 0.1048, 0.1090];

        let spline = CubicSpline::new(xs.clone(), ys.clone()).unwrap();

        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(spline.interpolate(*x).unwrap(), *y, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_linear_data_reproduced() {
        // A spline through collinear points is the line itself
        let xs = vec![0.0, 1.0, 2.0, 3.0];
        let ys = vec![1.0, 2.0, 3.0, 4.0];

        let spline = CubicSpline::new(xs, ys).unwrap();
        assert_relative_eq!(spline.interpolate(1.5).unwrap(), 2.5, epsilon = 1e-10);
        assert_relative_eq!(spline.interpolate(0.25).unwrap(), 1.25, epsilon = 1e-10);
    }

    #[test]
    fn test_out_of_domain_fails() {
        let xs = vec![0.0, 1.0, 2.0, 3.0];
        let ys = vec![0.0, 1.0, 4.0, 9.0];

        let spline = CubicSpline::new(xs, ys).unwrap();

        assert!(matches!(
            spline.interpolate(-0.5),
            Err(MathError::ExtrapolationNotAllowed { .. })
        ));
        assert!(spline.interpolate(3.0 + 1e-9).is_err());
        // Boundary points are in-domain
        assert!(spline.interpolate(0.0).is_ok());
        assert!(spline.interpolate(3.0).is_ok());
    }

    #[test]
    fn test_extrapolation_opt_in() {
        let xs = vec![0.0, 1.0, 2.0, 3.0];
        let ys = vec![0.0, 1.0, 4.0, 9.0];

        let spline = CubicSpline::new(xs, ys).unwrap().with_extrapolation();

        assert!(spline.allows_extrapolation());
        assert!(spline.interpolate(-0.5).is_ok());
        assert!(spline.interpolate(3.5).is_ok());
    }

    #[test]
    fn test_insufficient_points() {
        let xs = vec![0.0, 1.0];
        let ys = vec![0.0, 1.0];

        assert!(matches!(
            CubicSpline::new(xs, ys),
            Err(MathError::InsufficientData {
                required: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_non_monotonic_rejected() {
        let xs = vec![0.0, 2.0, 1.0];
        let ys = vec![0.0, 1.0, 2.0];
        assert!(CubicSpline::new(xs, ys).is_err());

        let xs = vec![0.0, 1.0, 1.0];
        let ys = vec![0.0, 1.0, 2.0];
        assert!(CubicSpline::new(xs, ys).is_err());
    }

    #[test]
    fn test_mismatched_lengths() {
        let xs = vec![0.0, 1.0, 2.0];
        let ys = vec![0.0, 1.0];
        assert!(CubicSpline::new(xs, ys).is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn spline_passes_through_knots(
                gaps in prop::collection::vec(1.0..200.0f64, 3..12),
                ys in prop::collection::vec(-0.5..0.5f64, 12),
            ) {
                let xs: Vec<f64> = gaps
                    .iter()
                    .scan(0.0, |acc, gap| {
                        *acc += gap;
                        Some(*acc)
                    })
                    .collect();
                let ys = ys[..xs.len()].to_vec();

                let spline = CubicSpline::new(xs.clone(), ys.clone()).unwrap();
                for (x, y) in xs.iter().zip(ys.iter()) {
                    let interpolated = spline.interpolate(*x).unwrap();
                    prop_assert!((interpolated - y).abs() < 1e-8);
                }
            }

            #[test]
            fn out_of_domain_always_fails(
                offset in 1e-6..1e6f64,
            ) {
                let spline =
                    CubicSpline::new(vec![10.0, 20.0, 30.0], vec![0.1, 0.2, 0.15]).unwrap();
                prop_assert!(spline.interpolate(30.0 + offset).is_err());
                prop_assert!(spline.interpolate(10.0 - offset).is_err());
            }
        }
    }
}
