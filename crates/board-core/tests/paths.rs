// File: crates/board-core/tests/paths.rs
// Purpose: Validate sparkline path building over normal and degenerate series.

use board_core::{build_path, Series};

#[test]
fn empty_series_yields_empty_paths() {
    let p = build_path(&Series::new(), 100.0, 30.0, true);
    assert_eq!(p.line, "");
    assert_eq!(p.fill, "");
}

#[test]
fn single_sample_does_not_divide_by_zero() {
    let p = build_path(&Series::from_values(vec![5.0]), 100.0, 30.0, true);
    // one vertex at x=0; degenerate range maps the sample to the bottom edge
    assert_eq!(p.line, "M 0.00 30.00");
    assert!(p.fill.ends_with("Z"));
}

#[test]
fn one_vertex_per_sample() {
    let s = Series::from_values(vec![1.0, 2.0, 3.0, 2.0, 1.0]);
    let p = build_path(&s, 120.0, 36.0, false);
    assert!(p.line.starts_with("M "));
    assert_eq!(p.line.matches(" L ").count(), 4);
    assert_eq!(p.fill, "");
}

#[test]
fn values_normalize_to_height() {
    let s = Series::from_values(vec![10.0, 20.0]);
    let p = build_path(&s, 100.0, 40.0, false);
    // min sits on the bottom edge, max on the top edge
    assert_eq!(p.line, "M 0.00 40.00 L 100.00 0.00");
}

#[test]
fn flat_series_uses_fallback_range() {
    let s = Series::from_values(vec![7.0, 7.0, 7.0]);
    let p = build_path(&s, 90.0, 30.0, false);
    // span falls back to 1, so every vertex lands on the bottom edge
    assert_eq!(p.line, "M 0.00 30.00 L 45.00 30.00 L 90.00 30.00");
}

#[test]
fn fill_closes_through_bottom_corners() {
    let s = Series::from_values(vec![1.0, 3.0, 2.0]);
    let p = build_path(&s, 100.0, 30.0, true);
    assert!(p.fill.starts_with(&p.line));
    assert!(p.fill.ends_with("L 100.00 30.00 L 0.00 30.00 Z"));
}

#[test]
fn non_finite_samples_are_dropped_at_construction() {
    let s = Series::from_values(vec![1.0, f64::NAN, 2.0, f64::INFINITY]);
    assert_eq!(s.len(), 2);
    let (min, max) = s.range();
    assert_eq!((min, max), (1.0, 2.0));
}
