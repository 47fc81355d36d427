//! Integration test: recover level, slope, and curvature from a
//! synthetic panel.
//!
//! The panel is generated from a three-factor model with orthogonal
//! date drivers and orthogonal maturity shapes, so the principal
//! components should line up with the hand-built factors.

use std::f64::consts::PI;

use curva_core::types::Date;
use curva_curves::{FixedMaturityPanel, MaturityGrid};
use curva_factors::prelude::*;

const DATES: usize = 24;

/// Builds a 24-date, 10-maturity panel as
/// `rate(t, y) = base + level(t) + slope(t) * s(y) + curv(t) * q(y)`
/// with Fourier drivers over dates (mutually orthogonal) and constant /
/// linear / centered-quadratic shapes over maturities.
fn synthetic_panel() -> FixedMaturityPanel {
    let grid = MaturityGrid::annual(10);
    let years: Vec<f64> = (1..=10).map(f64::from).collect();

    // Maturity shapes: s linear and zero-mean, q quadratic and
    // orthogonal to both the constant and s by symmetry.
    let s: Vec<f64> = years.iter().map(|y| (y - 5.5) / 4.5).collect();
    let q_raw: Vec<f64> = years.iter().map(|y| (y - 5.5) * (y - 5.5)).collect();
    let q_mean = q_raw.iter().sum::<f64>() / q_raw.len() as f64;
    let q: Vec<f64> = q_raw.iter().map(|v| (v - q_mean) / q_mean).collect();

    let mut rows = Vec::with_capacity(DATES);
    let start = Date::from_ymd(2024, 1, 1).unwrap();
    for t in 0..DATES {
        let phase = 2.0 * PI * t as f64 / DATES as f64;
        let level = 0.010 * phase.cos();
        let slope = 0.004 * (2.0 * phase).cos();
        let curv = 0.0015 * (3.0 * phase).cos();

        let row: Vec<f64> = (0..10)
            .map(|j| 0.11 + level + slope * s[j] + curv * q[j])
            .collect();
        rows.push((start.add_days(t as i64), row));
    }

    FixedMaturityPanel::from_rows(grid, rows).unwrap()
}

#[test]
fn test_three_factors_explain_everything() {
    let decomposition = extract_factors(&synthetic_panel()).unwrap();

    let top3: f64 = decomposition.explained_variance()[..3].iter().sum();
    assert!(
        top3 > 0.999,
        "three planted factors explain {top3}, expected ~1"
    );

    let total: f64 = decomposition.explained_variance().iter().sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn test_explained_variance_is_sorted() {
    let decomposition = extract_factors(&synthetic_panel()).unwrap();
    let ratios = decomposition.explained_variance();
    for pair in ratios.windows(2) {
        assert!(pair[0] >= pair[1] - 1e-12);
    }
}

#[test]
fn test_components_track_naive_factors() {
    let panel = synthetic_panel();
    let decomposition = extract_factors(&panel).unwrap();
    let naive = naive_factors(&panel).unwrap();

    let corr = score_correlations(&decomposition, &naive).unwrap();

    // PC1 is sign-fixed to positive loadings, so the level correlation
    // comes out positive; the other two are sign-ambiguous.
    assert!(corr[0] > 0.95, "PC1 vs level: {}", corr[0]);
    assert!(corr[1].abs() > 0.8, "PC2 vs slope: {}", corr[1]);
    assert!(corr[2].abs() > 0.6, "PC3 vs curvature: {}", corr[2]);
}

#[test]
fn test_pc1_loadings_all_positive() {
    let decomposition = extract_factors(&synthetic_panel()).unwrap();
    for loading in decomposition.loading(0) {
        assert!(loading > 0.0);
    }
}

#[test]
fn test_rerun_is_identical() {
    let panel = synthetic_panel();
    let a = extract_factors(&panel).unwrap();
    let b = extract_factors(&panel).unwrap();

    assert_eq!(a.explained_variance(), b.explained_variance());
    assert_eq!(a.loadings(), b.loadings());
    assert_eq!(a.scores(), b.scores());
}

#[test]
fn test_degenerate_panel_is_rejected() {
    let grid = MaturityGrid::annual(10);
    let row: Vec<f64> = (0..10).map(|j| 0.11 + 0.001 * f64::from(j)).collect();
    let panel = FixedMaturityPanel::from_rows(
        grid,
        vec![(Date::from_ymd(2024, 1, 2).unwrap(), row)],
    )
    .unwrap();

    let result = extract_factors(&panel);
    assert!(matches!(
        result,
        Err(FactorError::InsufficientData { rows: 1, .. })
    ));
}
