//! Integration test: build a DI fixed-maturity panel from raw
//! settlement rows.
//!
//! Exercises the full pipeline on synthetic-but-realistic B3 data: CSV
//! loading, contract code decoding, ANBIMA business-day counting, rate
//! derivation, per-date spline fitting, and grid resampling.

use curva_core::calendars::{BrazilCalendar, Calendar};
use curva_core::types::{Date, MarketConvention};
use curva_curves::prelude::*;

/// Three trading days of DI1 settlements across six maturities, priced
/// around an 11% flat curve. One malformed row is mixed in.
const SETTLEMENTS_CSV: &str = "\
reference_date,commodity,contract_code,settlement_price
2024-06-03,DI1,V24,96700.0
2024-06-03,DI1,F25,94250.0
2024-06-03,DI1,N25,89400.0
2024-06-03,DI1,F26,85200.0
2024-06-03,DI1,N26,81300.0
2024-06-03,DI1,F27,77300.0
2024-06-04,DI1,V24,96710.0
2024-06-04,DI1,F25,94270.0
2024-06-04,DI1,N25,89430.0
not-a-date,DI1,F26,85220.0
2024-06-04,DI1,F26,85230.0
2024-06-04,DI1,N26,81340.0
2024-06-04,DI1,F27,77350.0
2024-06-05,DI1,V24,96720.0
2024-06-05,DI1,F25,94290.0
2024-06-05,DI1,N25,89460.0
2024-06-05,DI1,F26,85260.0
2024-06-05,DI1,N26,81380.0
2024-06-05,DI1,F27,77400.0
";

fn build_panel() -> FixedMaturityPanel {
    let records = load_settlements(SETTLEMENTS_CSV.as_bytes()).unwrap();
    PanelBuilder::new(MarketConvention::brazil_di())
        .grid(MaturityGrid::new(vec![252, 504]).unwrap())
        .build(&records)
        .unwrap()
}

#[test]
fn test_panel_has_one_row_per_trading_day() {
    let panel = build_panel();

    assert_eq!(panel.len(), 3);
    assert_eq!(
        panel.dates(),
        &[
            Date::from_ymd(2024, 6, 3).unwrap(),
            Date::from_ymd(2024, 6, 4).unwrap(),
            Date::from_ymd(2024, 6, 5).unwrap(),
        ]
    );
    assert_eq!(panel.grid().days(), &[252, 504]);
}

#[test]
fn test_panel_rates_are_plausible() {
    let panel = build_panel();

    for i in 0..panel.len() {
        for rate in panel.row(i) {
            assert!(
                *rate > 0.05 && *rate < 0.20,
                "rate {rate} outside plausible band"
            );
        }
    }
}

#[test]
fn test_malformed_row_does_not_poison_its_date() {
    let records = load_settlements(SETTLEMENTS_CSV.as_bytes()).unwrap();
    // 19 data rows, 1 malformed
    assert_eq!(records.len(), 18);

    let panel = build_panel();
    // 2024-06-04 still contributes a full row
    assert_eq!(panel.dates()[1], Date::from_ymd(2024, 6, 4).unwrap());
}

#[test]
fn test_curves_pass_through_their_knots() {
    let records = load_settlements(SETTLEMENTS_CSV.as_bytes()).unwrap();
    let curves = PanelBuilder::new(MarketConvention::brazil_di())
        .build_curves(&records)
        .unwrap();

    assert_eq!(curves.len(), 3);
    for curve in &curves {
        assert_eq!(curve.points().len(), 6);
        for point in curve.points() {
            let interpolated = curve.rate(point.business_days).unwrap();
            assert!((interpolated - point.rate).abs() < 1e-10);
        }
        // Strictly increasing maturities
        for pair in curve.points().windows(2) {
            assert!(pair[0].business_days < pair[1].business_days);
        }
    }
}

#[test]
fn test_contract_days_match_calendar_count() {
    let records = load_settlements(SETTLEMENTS_CSV.as_bytes()).unwrap();
    let curves = PanelBuilder::new(MarketConvention::brazil_di())
        .build_curves(&records)
        .unwrap();

    // The shortest contract on 2024-06-03 is V24 (October 2024)
    let cal = BrazilCalendar::global();
    let reference = Date::from_ymd(2024, 6, 3).unwrap();
    let maturity = cal.next_business_day(Date::from_ymd(2024, 10, 1).unwrap());
    let expected_days = cal.business_days_between(reference, maturity);

    assert_eq!(curves[0].min_days(), expected_days as u32);
}

#[test]
fn test_no_extrapolation_beyond_longest_contract() {
    let records = load_settlements(SETTLEMENTS_CSV.as_bytes()).unwrap();
    let curves = PanelBuilder::new(MarketConvention::brazil_di())
        .build_curves(&records)
        .unwrap();

    let curve = &curves[0];
    assert!(curve.rate(curve.max_days() + 1).is_err());
    assert!(curve.rate(curve.min_days() - 1).is_err());
}

#[test]
fn test_build_is_deterministic() {
    let a = build_panel();
    let b = build_panel();
    assert_eq!(a, b);
}

#[test]
fn test_grid_beyond_data_yields_empty_panel_error() {
    let records = load_settlements(SETTLEMENTS_CSV.as_bytes()).unwrap();
    let result = PanelBuilder::new(MarketConvention::brazil_di())
        .grid(MaturityGrid::annual(10))
        .build(&records);

    // Longest contract is ~2.6 years; a 10-year grid cannot be covered
    assert!(matches!(result, Err(CurveError::EmptyPanel)));
}
