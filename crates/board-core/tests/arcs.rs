// File: crates/board-core/tests/arcs.rs
// Purpose: Validate arc gauge fraction clamping and endpoint geometry.

use board_core::{arc_path, build_arc, fraction, PointF};

const EPS: f64 = 1e-9;

#[test]
fn fraction_clamps_to_unit_interval() {
    assert_eq!(fraction(5.0, 10.0), 0.5);
    assert_eq!(fraction(20.0, 10.0), 1.0);
    assert_eq!(fraction(-3.0, 10.0), 0.0);
    assert_eq!(fraction(1.0, 0.0), 0.0);
    assert_eq!(fraction(f64::NAN, 10.0), 0.0);
}

#[test]
fn overdriven_value_matches_full_scale() {
    assert_eq!(build_arc(20.0, 10.0, 40.0), build_arc(10.0, 10.0, 40.0));
    assert_eq!(arc_path(PointF::new(50.0, 50.0), 40.0, 20.0, 10.0),
               arc_path(PointF::new(50.0, 50.0), 40.0, 10.0, 10.0));
}

#[test]
fn endpoints_are_circle_parametric() {
    let r = 40.0;
    // start of every sweep is the -90 degree point
    let arc = build_arc(0.0, 10.0, r);
    assert!((arc.start.x - 0.0).abs() < EPS);
    assert!((arc.start.y + r).abs() < EPS);

    // half scale sweeps 90 degrees to the 0-degree point
    let half = build_arc(5.0, 10.0, r);
    assert!((half.end.x - r).abs() < EPS);
    assert!(half.end.y.abs() < EPS);

    // full scale ends at +90 degrees
    let full = build_arc(10.0, 10.0, r);
    assert!(full.end.x.abs() < EPS);
    assert!((full.end.y - r).abs() < EPS);
}

#[test]
fn large_arc_flag_stays_clear_over_fixed_range() {
    for value in [0.0, 2.5, 5.0, 7.5, 10.0, 100.0] {
        assert!(!build_arc(value, 10.0, 40.0).large_arc);
    }
}

#[test]
fn arc_path_emits_svg_arc_command() {
    let d = arc_path(PointF::new(60.0, 60.0), 40.0, 5.0, 10.0);
    assert!(d.starts_with("M 60.00 20.00"), "{d}");
    assert!(d.contains("A 40.00 40.00 0 0 1"), "{d}");
    assert!(d.ends_with("100.00 60.00"), "{d}");
}
