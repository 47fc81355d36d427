//! Fixed-maturity rate panels.
//!
//! The panel is the rectangular artifact handed to the factor
//! extraction stage: one row per reference date, one column per fixed
//! business-day maturity, values interpolated from that date's curve.

use std::collections::BTreeMap;

use log::{debug, warn};
use nalgebra::DMatrix;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use curva_core::calendars::BusinessDayConvention;
use curva_core::types::{Date, MarketConvention};

use crate::curve::DiCurve;
use crate::error::{CurveError, CurveResult};
use crate::rate_point::RatePoint;
use crate::records::SettlementRecord;

/// An ordered grid of fixed business-day maturities.
///
/// Strongly typed replacement for string-keyed column lookups: the
/// maturity list is fixed at construction and panel columns are always
/// aligned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaturityGrid {
    days: Vec<u32>,
}

impl MaturityGrid {
    /// Creates a grid from explicit business-day maturities.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty grid or non-increasing maturities.
    pub fn new(days: Vec<u32>) -> CurveResult<Self> {
        if days.is_empty() {
            return Err(CurveError::InsufficientPoints {
                required: 1,
                got: 0,
            });
        }
        for i in 1..days.len() {
            if days[i] <= days[i - 1] {
                return Err(CurveError::NonMonotonicMaturities {
                    index: i,
                    prev: days[i - 1],
                    current: days[i],
                });
            }
        }
        Ok(Self { days })
    }

    /// Annual grid under the 252 business-day convention:
    /// {252, 504, ..., 252 * years}.
    ///
    /// # Panics
    ///
    /// Panics if `years` is zero.
    #[must_use]
    pub fn annual(years: u32) -> Self {
        assert!(years > 0, "grid needs at least one year");
        Self {
            days: (1..=years).map(|y| y * 252).collect(),
        }
    }

    /// The maturities in ascending order.
    #[must_use]
    pub fn days(&self) -> &[u32] {
        &self.days
    }

    /// Number of maturities on the grid.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns true if the grid has no maturities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Column index of a maturity, if present.
    #[must_use]
    pub fn index_of(&self, business_days: u32) -> Option<usize> {
        self.days.binary_search(&business_days).ok()
    }
}

/// Time series of interpolated rates on a fixed maturity grid.
///
/// One row per reference date that had full grid coverage; dates whose
/// curves do not span the entire grid are dropped, never partially
/// included. Rows are ordered by ascending reference date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedMaturityPanel {
    grid: MaturityGrid,
    dates: Vec<Date>,
    rows: Vec<Vec<f64>>,
}

impl FixedMaturityPanel {
    /// Assembles a panel from pre-computed rows.
    ///
    /// # Errors
    ///
    /// Returns an error if any row width differs from the grid, or if
    /// the dates are not strictly increasing.
    pub fn from_rows(grid: MaturityGrid, rows: Vec<(Date, Vec<f64>)>) -> CurveResult<Self> {
        let mut dates = Vec::with_capacity(rows.len());
        let mut values = Vec::with_capacity(rows.len());

        for (date, row) in rows {
            if row.len() != grid.len() {
                return Err(CurveError::invalid_record(format!(
                    "panel row for {date} has {} values, grid has {}",
                    row.len(),
                    grid.len()
                )));
            }
            if let Some(&last) = dates.last() {
                if date <= last {
                    return Err(CurveError::invalid_record(format!(
                        "panel dates must be strictly increasing: {last} then {date}"
                    )));
                }
            }
            dates.push(date);
            values.push(row);
        }

        Ok(Self {
            grid,
            dates,
            rows: values,
        })
    }

    /// The maturity grid the columns are aligned to.
    #[must_use]
    pub fn grid(&self) -> &MaturityGrid {
        &self.grid
    }

    /// Reference dates, one per row, ascending.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Number of reference dates (rows).
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if no reference date survived.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The rates for one reference date, aligned to the grid.
    #[must_use]
    pub fn row(&self, index: usize) -> &[f64] {
        &self.rows[index]
    }

    /// The rate series for one maturity column.
    #[must_use]
    pub fn column(&self, index: usize) -> Vec<f64> {
        self.rows.iter().map(|row| row[index]).collect()
    }

    /// The full panel as a dense matrix (rows = dates, columns = grid).
    #[must_use]
    pub fn rates_matrix(&self) -> DMatrix<f64> {
        DMatrix::from_fn(self.dates.len(), self.grid.len(), |i, j| self.rows[i][j])
    }
}

/// Builds per-date curves and a fixed-maturity panel from settlement
/// records.
///
/// The pipeline:
///
/// 1. decode each contract maturity, roll it forward to the next
///    business day, and count business days from the reference date;
///    records with a non-positive count are dropped;
/// 2. convert surviving records to [`RatePoint`]s (bad prices dropped);
/// 3. group points by reference date, deduplicating by maturity with
///    last write wins;
/// 4. fit a natural cubic spline per date (dates with fewer than
///    [`DiCurve::MIN_POINTS`] points dropped);
/// 5. evaluate each curve on the grid; dates without full coverage are
///    dropped entirely.
///
/// Per-record failures are logged and skipped, never fatal. Curve
/// construction for different dates is independent and runs in
/// parallel; the panel row order is by ascending reference date
/// regardless of scheduling.
#[derive(Debug, Clone)]
pub struct PanelBuilder {
    convention: MarketConvention,
    grid: MaturityGrid,
    maturity_adjustment: BusinessDayConvention,
}

impl PanelBuilder {
    /// Creates a builder with the default 1..10 year annual grid.
    #[must_use]
    pub fn new(convention: MarketConvention) -> Self {
        Self {
            convention,
            grid: MaturityGrid::annual(10),
            maturity_adjustment: BusinessDayConvention::Following,
        }
    }

    /// Replaces the maturity grid.
    #[must_use]
    pub fn grid(mut self, grid: MaturityGrid) -> Self {
        self.grid = grid;
        self
    }

    /// Replaces the contract maturity adjustment convention.
    #[must_use]
    pub fn maturity_adjustment(mut self, convention: BusinessDayConvention) -> Self {
        self.maturity_adjustment = convention;
        self
    }

    /// Builds one curve per reference date with enough usable points.
    ///
    /// Returned curves are sorted by ascending reference date.
    pub fn build_curves(&self, records: &[SettlementRecord]) -> CurveResult<Vec<DiCurve>> {
        let groups = self.group_rate_points(records);

        let curves: Vec<DiCurve> = groups
            .into_iter()
            .collect::<Vec<_>>()
            .into_par_iter()
            .filter_map(|(date, points)| {
                let points: Vec<RatePoint> = points.into_values().collect();
                match DiCurve::new(date, points, self.convention) {
                    Ok(curve) => Some(curve),
                    Err(CurveError::InsufficientPoints { got, .. }) => {
                        debug!("dropping {date}: only {got} usable rate points");
                        None
                    }
                    Err(err) => {
                        warn!("dropping {date}: {err}");
                        None
                    }
                }
            })
            .collect();

        Ok(curves)
    }

    /// Builds the fixed-maturity panel.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::EmptyPanel` if no reference date covers the
    /// full grid.
    pub fn build(&self, records: &[SettlementRecord]) -> CurveResult<FixedMaturityPanel> {
        let curves = self.build_curves(records)?;

        let mut rows = Vec::with_capacity(curves.len());
        for curve in &curves {
            let date = curve.reference_date();
            if !self.grid.days().iter().all(|&d| curve.covers(d)) {
                debug!(
                    "dropping {date}: curve domain [{}, {}] does not cover grid",
                    curve.min_days(),
                    curve.max_days()
                );
                continue;
            }

            let row: CurveResult<Vec<f64>> = self
                .grid
                .days()
                .iter()
                .map(|&d| curve.rate(d))
                .collect();
            rows.push((date, row?));
        }

        if rows.is_empty() {
            return Err(CurveError::EmptyPanel);
        }

        FixedMaturityPanel::from_rows(self.grid.clone(), rows)
    }

    /// Filters, converts, groups, and deduplicates settlement records
    /// into per-date rate points sorted by maturity.
    fn group_rate_points(
        &self,
        records: &[SettlementRecord],
    ) -> BTreeMap<Date, BTreeMap<u32, RatePoint>> {
        let calendar = self.convention.calendar();
        let mut groups: BTreeMap<Date, BTreeMap<u32, RatePoint>> = BTreeMap::new();

        for record in records {
            let maturity = match record.maturity() {
                Ok(date) => date,
                Err(err) => {
                    warn!("skipping record on {}: {err}", record.reference_date);
                    continue;
                }
            };

            let adjusted = match calendar.adjust(maturity, self.maturity_adjustment) {
                Ok(date) => date,
                Err(err) => {
                    warn!("skipping record on {}: {err}", record.reference_date);
                    continue;
                }
            };

            let business_days = calendar.business_days_between(record.reference_date, adjusted);
            if business_days <= 0 {
                debug!(
                    "skipping expired contract {} on {}",
                    record.contract_code, record.reference_date
                );
                continue;
            }

            let point = match RatePoint::from_settlement(
                record.settlement_price,
                business_days as u32,
                &self.convention,
            ) {
                Ok(point) => point,
                Err(err) => {
                    warn!("skipping record on {}: {err}", record.reference_date);
                    continue;
                }
            };

            // Last write wins for duplicate (date, maturity) pairs
            groups
                .entry(record.reference_date)
                .or_default()
                .insert(point.business_days, point);
        }

        groups
    }
}
