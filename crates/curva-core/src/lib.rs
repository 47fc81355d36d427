//! # Curva Core
//!
//! Core types, calendars, and market conventions for the Curva rate
//! analytics library.
//!
//! This crate provides the foundational building blocks used throughout
//! Curva:
//!
//! - **Types**: Domain-specific types like [`Date`] and [`MarketConvention`]
//! - **Business Day Calendars**: Holiday calendars, including the Brazilian
//!   ANBIMA calendar used by DI futures
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing incompatible values
//! - **Explicit Over Implicit**: Market conventions (notional, day-count
//!   basis, calendar) are injected, never hardcoded
//!
//! ## Example
//!
//! ```rust
//! use curva_core::calendars::{BrazilCalendar, Calendar};
//! use curva_core::types::Date;
//!
//! let cal = BrazilCalendar::global();
//! let tiradentes = Date::from_ymd(2025, 4, 21).unwrap();
//! assert!(cal.is_holiday(tiradentes));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::uninlined_format_args)]

pub mod calendars;
pub mod error;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use types::{CalendarId, Date, MarketConvention};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{
        BrazilCalendar, BusinessDayConvention, Calendar, WeekendCalendar,
    };
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{CalendarId, Date, MarketConvention};
}
