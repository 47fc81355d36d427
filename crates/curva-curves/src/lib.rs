//! # Curva Curves
//!
//! Zero curve construction from DI futures settlement data.
//!
//! This crate implements the curve-building half of Curva:
//!
//! - **Records**: Settlement record schema and CSV loading
//! - **Rate Points**: Settlement price to annualized discrete rate
//! - **Curves**: One interpolated zero curve per reference date
//! - **Panel**: Resampling every curve onto a fixed business-day
//!   maturity grid, producing a rectangular date-by-maturity rate panel
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use curva_core::prelude::*;
//! use curva_curves::prelude::*;
//!
//! let records = load_settlements(std::fs::File::open("di1.csv")?)?;
//! let panel = PanelBuilder::new(MarketConvention::brazil_di())
//!     .grid(MaturityGrid::annual(10))
//!     .build(records)?;
//!
//! // One row per reference date with full grid coverage
//! let rates = panel.rates_matrix();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod curve;
pub mod error;
pub mod panel;
pub mod rate_point;
pub mod records;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::curve::DiCurve;
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::panel::{FixedMaturityPanel, MaturityGrid, PanelBuilder};
    pub use crate::rate_point::RatePoint;
    pub use crate::records::{contract_maturity, load_settlements, SettlementRecord};
}

pub use curve::DiCurve;
pub use error::{CurveError, CurveResult};
pub use panel::{FixedMaturityPanel, MaturityGrid, PanelBuilder};
pub use rate_point::RatePoint;
pub use records::SettlementRecord;
