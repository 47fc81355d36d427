//! Market conventions for rate futures.
//!
//! Different futures markets use different face values, day-count bases,
//! and holiday calendars. This module bundles those into an explicit
//! configuration object that is injected into curve construction, so no
//! constant is hardcoded in the pricing pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendars::{BrazilCalendar, Calendar, WeekendCalendar};
use crate::error::{CoreError, CoreResult};

/// Identifier for a supported business-day calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CalendarId {
    /// Brazilian ANBIMA national holiday calendar.
    #[default]
    BrazilAnbima,
    /// Weekend-only calendar (no holidays). Useful for tests.
    WeekendOnly,
}

impl CalendarId {
    /// Returns the calendar implementation for this identifier.
    #[must_use]
    pub fn instance(&self) -> &'static dyn Calendar {
        match self {
            Self::BrazilAnbima => BrazilCalendar::global(),
            Self::WeekendOnly => &WeekendCalendar,
        }
    }
}

impl fmt::Display for CalendarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BrazilAnbima => "Brazil ANBIMA",
            Self::WeekendOnly => "Weekend Only",
        };
        write!(f, "{name}")
    }
}

/// Market convention for a rate futures contract.
///
/// Encapsulates the contract face value, the day-count annualization
/// basis, and the holiday calendar used for business-day counting.
///
/// # Example
///
/// ```rust
/// use curva_core::types::MarketConvention;
///
/// let conv = MarketConvention::brazil_di();
/// assert_eq!(conv.notional, 100_000.0);
/// assert_eq!(conv.annualization_basis, 252);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketConvention {
    /// Contract face value at maturity.
    pub notional: f64,
    /// Business days per year for annualization (e.g. 252).
    pub annualization_basis: u32,
    /// Holiday calendar for business-day counting.
    pub calendar: CalendarId,
}

impl MarketConvention {
    /// Creates a convention, validating its fields.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidConvention` if the notional is not
    /// positive and finite, or the annualization basis is zero.
    pub fn new(notional: f64, annualization_basis: u32, calendar: CalendarId) -> CoreResult<Self> {
        if !notional.is_finite() || notional <= 0.0 {
            return Err(CoreError::invalid_convention(format!(
                "notional must be positive and finite, got {notional}"
            )));
        }
        if annualization_basis == 0 {
            return Err(CoreError::invalid_convention(
                "annualization basis must be positive",
            ));
        }
        Ok(Self {
            notional,
            annualization_basis,
            calendar,
        })
    }

    /// Convention for B3 DI1 futures: 100,000 face value, ACT/252
    /// discrete compounding, ANBIMA holiday calendar.
    #[must_use]
    pub fn brazil_di() -> Self {
        Self {
            notional: 100_000.0,
            annualization_basis: 252,
            calendar: CalendarId::BrazilAnbima,
        }
    }

    /// Returns the calendar implementation for this convention.
    #[must_use]
    pub fn calendar(&self) -> &'static dyn Calendar {
        self.calendar.instance()
    }
}

impl Default for MarketConvention {
    fn default() -> Self {
        Self::brazil_di()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brazil_di_defaults() {
        let conv = MarketConvention::brazil_di();
        assert_eq!(conv.notional, 100_000.0);
        assert_eq!(conv.annualization_basis, 252);
        assert_eq!(conv.calendar, CalendarId::BrazilAnbima);
        assert_eq!(conv.calendar().name(), "Brazil ANBIMA");
    }

    #[test]
    fn test_new_rejects_bad_notional() {
        assert!(MarketConvention::new(0.0, 252, CalendarId::WeekendOnly).is_err());
        assert!(MarketConvention::new(-1.0, 252, CalendarId::WeekendOnly).is_err());
        assert!(MarketConvention::new(f64::NAN, 252, CalendarId::WeekendOnly).is_err());
    }

    #[test]
    fn test_new_rejects_zero_basis() {
        assert!(MarketConvention::new(100_000.0, 0, CalendarId::WeekendOnly).is_err());
    }

    #[test]
    fn test_calendar_id_display() {
        assert_eq!(CalendarId::BrazilAnbima.to_string(), "Brazil ANBIMA");
        assert_eq!(CalendarId::WeekendOnly.to_string(), "Weekend Only");
    }
}
