//! Domain types for rate analytics.
//!
//! This module provides type-safe representations of the core concepts:
//!
//! - [`Date`]: Calendar date for financial calculations
//! - [`MarketConvention`]: Notional, annualization basis, and calendar
//!   for a futures market
//! - [`CalendarId`]: Named business-day calendars

mod date;
mod market_convention;

pub use date::Date;
pub use market_convention::{CalendarId, MarketConvention};
