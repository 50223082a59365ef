// File: crates/board-core/src/arc.rs
// Summary: Arc gauge geometry; clamped fraction, circle-parametric endpoints, SVG arc path.

use crate::geometry::{fmt_px, PointF};

/// Angle where the gauge sweep begins, in degrees.
pub const ARC_START_DEG: f64 = -90.0;
/// Full sweep of the gauge, in degrees (a fixed semicircle ending at +90).
pub const ARC_SWEEP_DEG: f64 = 180.0;

/// Endpoints and large-arc flag for one gauge sweep, centered at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcGeometry {
    pub start: PointF,
    pub end: PointF,
    pub large_arc: bool,
}

/// `value / max` clamped into `[0, 1]`. A non-positive `max` or a non-finite
/// ratio clamps to 0, so `value = 2 * max` behaves exactly like `value = max`.
pub fn fraction(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    let f = value / max;
    if !f.is_finite() {
        return 0.0;
    }
    f.clamp(0.0, 1.0)
}

/// Point on a circle of `radius` around `center` at `angle_deg`.
pub fn point_on_circle(center: PointF, radius: f64, angle_deg: f64) -> PointF {
    let rad = angle_deg.to_radians();
    PointF::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
}

/// Geometry for the sweep representing `value` out of `max`, centered at the
/// origin. The large-arc flag cannot be set under the fixed 180-degree range,
/// but the computation is kept.
pub fn build_arc(value: f64, max: f64, radius: f64) -> ArcGeometry {
    let sweep = fraction(value, max) * ARC_SWEEP_DEG;
    let start = point_on_circle(PointF::ORIGIN, radius, ARC_START_DEG);
    let end = point_on_circle(PointF::ORIGIN, radius, ARC_START_DEG + sweep);
    ArcGeometry { start, end, large_arc: sweep > 180.0 }
}

/// SVG path data (`M ... A ...`) for the sweep, translated to `center`.
pub fn arc_path(center: PointF, radius: f64, value: f64, max: f64) -> String {
    let arc = build_arc(value, max, radius);
    format!(
        "M {} {} A {} {} 0 {} 1 {} {}",
        fmt_px(center.x + arc.start.x),
        fmt_px(center.y + arc.start.y),
        fmt_px(radius),
        fmt_px(radius),
        u8::from(arc.large_arc),
        fmt_px(center.x + arc.end.x),
        fmt_px(center.y + arc.end.y),
    )
}
