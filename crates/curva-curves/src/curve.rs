//! Per-date DI zero curves.

use curva_core::types::{Date, MarketConvention};
use curva_math::interpolation::{CubicSpline, Interpolator};
use curva_math::MathError;

use crate::error::{CurveError, CurveResult};
use crate::rate_point::RatePoint;

/// An interpolated zero-coupon rate curve for a single reference date.
///
/// Holds the rate points implied by that date's futures settlements,
/// sorted by strictly increasing business-day maturity, and a natural
/// cubic spline over them. Evaluation is only defined inside the
/// observed maturity range; out-of-domain queries fail instead of
/// extrapolating.
///
/// # Example
///
/// ```rust
/// use curva_core::types::{Date, MarketConvention};
/// use curva_curves::{DiCurve, RatePoint};
///
/// let points = vec![
///     RatePoint { business_days: 21, rate: 0.1065 },
///     RatePoint { business_days: 126, rate: 0.1040 },
///     RatePoint { business_days: 252, rate: 0.1052 },
///     RatePoint { business_days: 504, rate: 0.1101 },
/// ];
/// let curve = DiCurve::new(
///     Date::from_ymd(2024, 6, 3).unwrap(),
///     points,
///     MarketConvention::brazil_di(),
/// ).unwrap();
///
/// let rate = curve.rate(300).unwrap();
/// assert!(curve.rate(600).is_err()); // beyond the last contract
/// ```
#[derive(Debug, Clone)]
pub struct DiCurve {
    reference_date: Date,
    points: Vec<RatePoint>,
    convention: MarketConvention,
    spline: CubicSpline,
}

impl DiCurve {
    /// Minimum number of rate points for a natural cubic spline.
    pub const MIN_POINTS: usize = 3;

    /// Builds a curve from rate points for one reference date.
    ///
    /// The points must already be sorted by strictly increasing
    /// business-day maturity; duplicates must have been resolved by the
    /// caller (the panel builder keeps the last observation).
    ///
    /// # Errors
    ///
    /// - `CurveError::InsufficientPoints` for fewer than 3 points.
    /// - `CurveError::NonMonotonicMaturities` if maturities are not
    ///   strictly increasing.
    pub fn new(
        reference_date: Date,
        points: Vec<RatePoint>,
        convention: MarketConvention,
    ) -> CurveResult<Self> {
        if points.len() < Self::MIN_POINTS {
            return Err(CurveError::InsufficientPoints {
                required: Self::MIN_POINTS,
                got: points.len(),
            });
        }

        for i in 1..points.len() {
            if points[i].business_days <= points[i - 1].business_days {
                return Err(CurveError::NonMonotonicMaturities {
                    index: i,
                    prev: points[i - 1].business_days,
                    current: points[i].business_days,
                });
            }
        }

        let xs: Vec<f64> = points.iter().map(|p| f64::from(p.business_days)).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.rate).collect();
        let spline = CubicSpline::new(xs, ys)?;

        Ok(Self {
            reference_date,
            points,
            convention,
            spline,
        })
    }

    /// The reference date this curve was observed on.
    #[must_use]
    pub fn reference_date(&self) -> Date {
        self.reference_date
    }

    /// The market convention the rates were derived under.
    #[must_use]
    pub fn convention(&self) -> &MarketConvention {
        &self.convention
    }

    /// The underlying rate points, in ascending maturity order.
    #[must_use]
    pub fn points(&self) -> &[RatePoint] {
        &self.points
    }

    /// Shortest observed maturity in business days.
    #[must_use]
    pub fn min_days(&self) -> u32 {
        self.points[0].business_days
    }

    /// Longest observed maturity in business days.
    #[must_use]
    pub fn max_days(&self) -> u32 {
        self.points[self.points.len() - 1].business_days
    }

    /// Returns true if the maturity lies inside the observed range.
    #[must_use]
    pub fn covers(&self, business_days: u32) -> bool {
        business_days >= self.min_days() && business_days <= self.max_days()
    }

    /// Interpolated annualized rate at the given business-day maturity.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::MaturityOutOfRange` when the maturity lies
    /// outside `[min_days, max_days]`; the curve never extrapolates.
    pub fn rate(&self, business_days: u32) -> CurveResult<f64> {
        match self.spline.interpolate(f64::from(business_days)) {
            Ok(rate) => Ok(rate),
            Err(MathError::ExtrapolationNotAllowed { .. }) => {
                Err(CurveError::MaturityOutOfRange {
                    requested: business_days,
                    min: self.min_days(),
                    max: self.max_days(),
                })
            }
            Err(err) => Err(err.into()),
        }
    }
}
