//! Rate points derived from settlement prices.

use serde::{Deserialize, Serialize};

use curva_core::types::MarketConvention;

use crate::error::{CurveError, CurveResult};

/// A single point on a zero curve: an annualized discrete rate at a
/// business-day maturity.
///
/// Derived from a futures settlement price via
///
/// ```text
/// rate = (notional / price)^(basis / business_days) - 1
/// ```
///
/// a pure function of `(price, business_days)` under a given
/// [`MarketConvention`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatePoint {
    /// Business days from the reference date to the adjusted maturity.
    pub business_days: u32,
    /// Annualized discrete rate, as a decimal (0.1325 for 13.25% p.a.).
    pub rate: f64,
}

impl RatePoint {
    /// Derives a rate point from a settlement price.
    ///
    /// # Errors
    ///
    /// - `CurveError::InvalidPrice` if the price is not positive and finite.
    /// - `CurveError::InvalidRecord` if `business_days` is zero.
    pub fn from_settlement(
        price: f64,
        business_days: u32,
        convention: &MarketConvention,
    ) -> CurveResult<Self> {
        if !price.is_finite() || price <= 0.0 {
            return Err(CurveError::invalid_price(
                price,
                "settlement price must be positive and finite",
            ));
        }
        if business_days == 0 {
            return Err(CurveError::invalid_record(
                "business-day count to maturity must be positive",
            ));
        }

        let exponent = f64::from(convention.annualization_basis) / f64::from(business_days);
        let rate = (convention.notional / price).powf(exponent) - 1.0;

        Ok(Self {
            business_days,
            rate,
        })
    }
}
